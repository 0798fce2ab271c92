//! AI feature stubs. Each reports unavailable until the AI provider key is
//! configured; the inference pipeline itself is out of scope here.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

fn feature_status(state: &AppState) -> &'static str {
    if state.settings.ai.provider_configured() {
        "placeholder"
    } else {
        "unavailable"
    }
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    message: String,
    status: &'static str,
    suggestions: Vec<serde_json::Value>,
}

#[derive(Serialize)]
pub struct CategorizeResponse {
    message: String,
    status: &'static str,
    categories: Vec<String>,
}

#[derive(Serialize)]
pub struct SentimentResponse {
    message: String,
    status: &'static str,
    sentiment: &'static str,
}

#[derive(Serialize)]
pub struct ModerationResponse {
    message: String,
    status: &'static str,
    moderation_result: &'static str,
}

pub async fn content_suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        message: "AI content suggestions endpoint - to be implemented".to_string(),
        status: feature_status(&state),
        suggestions: Vec::new(),
    })
}

pub async fn categorize_content(State(state): State<AppState>) -> Json<CategorizeResponse> {
    Json(CategorizeResponse {
        message: "AI categorization endpoint - to be implemented".to_string(),
        status: feature_status(&state),
        categories: Vec::new(),
    })
}

pub async fn analyze_sentiment(State(state): State<AppState>) -> Json<SentimentResponse> {
    Json(SentimentResponse {
        message: "AI sentiment analysis endpoint - to be implemented".to_string(),
        status: feature_status(&state),
        sentiment: "neutral",
    })
}

pub async fn moderate_content(State(state): State<AppState>) -> Json<ModerationResponse> {
    Json(ModerationResponse {
        message: "AI content moderation endpoint - to be implemented".to_string(),
        status: feature_status(&state),
        moderation_result: "approved",
    })
}
