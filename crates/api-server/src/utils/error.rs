use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::database::DbError;

/// Request-scoped failures, translated into structured responses at the
/// boundary. Stable codes go in the `error` field; internals stay out of
/// the body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection refused: {0}")]
    ConnectionRefused(String),

    #[error("Pool exhausted: {0}")]
    PoolExhausted(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionRefused(_) => ApiError::ConnectionRefused(err.to_string()),
            DbError::PoolExhausted { .. } => ApiError::PoolExhausted(err.to_string()),
            DbError::Other(_) => ApiError::DatabaseError(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::ConnectionRefused(msg) => {
                tracing::error!("Connection refused: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "ConnectionRefused", msg)
            }
            ApiError::PoolExhausted(msg) => {
                tracing::error!("Pool exhausted: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "PoolExhausted", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn pool_exhaustion_is_a_retryable_503() {
        let err = ApiError::from(DbError::PoolExhausted { wait_secs: 30 });
        let (status, body) = parts(err).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "PoolExhausted");
    }

    #[tokio::test]
    async fn connection_refused_is_a_retryable_503() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::from(DbError::ConnectionRefused(sqlx::Error::Io(io)));
        let (status, body) = parts(err).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "ConnectionRefused");
    }

    #[tokio::test]
    async fn bodies_carry_stable_codes() {
        let (status, body) = parts(ApiError::NotFound("thought abc".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "thought abc");
    }
}
