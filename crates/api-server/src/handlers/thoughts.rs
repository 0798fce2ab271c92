//! Thoughts resource group. CRUD placeholders until the storage contract
//! lands; real handlers will acquire a scoped connection from
//! `AppState::db_pool`.

use axum::{extract::Path, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ThoughtListResponse {
    message: String,
    status: &'static str,
    thoughts: Vec<serde_json::Value>,
}

#[derive(Serialize)]
pub struct ThoughtResponse {
    message: String,
    status: &'static str,
    thought_id: Option<String>,
}

pub async fn list_thoughts() -> Json<ThoughtListResponse> {
    Json(ThoughtListResponse {
        message: "Get thoughts endpoint - to be implemented".to_string(),
        status: "placeholder",
        thoughts: Vec::new(),
    })
}

pub async fn create_thought() -> Json<ThoughtResponse> {
    Json(ThoughtResponse {
        message: "Create thought endpoint - to be implemented".to_string(),
        status: "placeholder",
        thought_id: None,
    })
}

pub async fn get_thought(Path(thought_id): Path<String>) -> Json<ThoughtResponse> {
    Json(ThoughtResponse {
        message: format!("Get thought {thought_id} endpoint - to be implemented"),
        status: "placeholder",
        thought_id: Some(thought_id),
    })
}

pub async fn update_thought(Path(thought_id): Path<String>) -> Json<ThoughtResponse> {
    Json(ThoughtResponse {
        message: format!("Update thought {thought_id} endpoint - to be implemented"),
        status: "placeholder",
        thought_id: Some(thought_id),
    })
}

pub async fn delete_thought(Path(thought_id): Path<String>) -> Json<ThoughtResponse> {
    Json(ThoughtResponse {
        message: format!("Delete thought {thought_id} endpoint - to be implemented"),
        status: "placeholder",
        thought_id: Some(thought_id),
    })
}
