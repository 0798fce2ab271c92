//! Users resource group placeholders.

use axum::{extract::Path, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct UserListResponse {
    message: String,
    status: &'static str,
    users: Vec<serde_json::Value>,
}

#[derive(Serialize)]
pub struct UserResponse {
    message: String,
    status: &'static str,
    user_id: String,
}

pub async fn list_users() -> Json<UserListResponse> {
    Json(UserListResponse {
        message: "Get users endpoint - to be implemented".to_string(),
        status: "placeholder",
        users: Vec::new(),
    })
}

pub async fn get_user(Path(user_id): Path<String>) -> Json<UserResponse> {
    Json(UserResponse {
        message: format!("Get user {user_id} endpoint - to be implemented"),
        status: "placeholder",
        user_id,
    })
}

pub async fn update_user(Path(user_id): Path<String>) -> Json<UserResponse> {
    Json(UserResponse {
        message: format!("Update user {user_id} endpoint - to be implemented"),
        status: "placeholder",
        user_id,
    })
}

pub async fn delete_user(Path(user_id): Path<String>) -> Json<UserResponse> {
    Json(UserResponse {
        message: format!("Delete user {user_id} endpoint - to be implemented"),
        status: "placeholder",
        user_id,
    })
}
