//! Authentication endpoints. The protocol itself is delegated to the
//! external identity provider; these report placeholder or unavailable
//! depending on whether its credentials are configured.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct AuthResponse {
    message: String,
    status: &'static str,
}

fn placeholder(state: &AppState, message: &str) -> Json<AuthResponse> {
    Json(AuthResponse {
        message: message.to_string(),
        status: if state.settings.auth.identity_provider_configured() {
            "placeholder"
        } else {
            "unavailable"
        },
    })
}

pub async fn register_user(State(state): State<AppState>) -> Json<AuthResponse> {
    placeholder(
        &state,
        "User registration endpoint - to be implemented with Clerk",
    )
}

pub async fn login_user(State(state): State<AppState>) -> Json<AuthResponse> {
    placeholder(&state, "User login endpoint - to be implemented with Clerk")
}

pub async fn logout_user(State(state): State<AppState>) -> Json<AuthResponse> {
    placeholder(&state, "User logout endpoint - to be implemented with Clerk")
}

pub async fn current_user(State(state): State<AppState>) -> Json<AuthResponse> {
    placeholder(
        &state,
        "Current user endpoint - to be implemented with Clerk",
    )
}
