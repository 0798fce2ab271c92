use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::database::redacted_host;
use crate::state::AppState;

/// Point-in-time health report, derived from a live probe on every request.
#[derive(Serialize)]
pub struct HealthReport {
    status: &'static str,
    version: &'static str,
    environment: String,
    database: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
pub struct DatabaseHealthReport {
    database_status: &'static str,
    database_url: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    let connected = state.db_pool.probe().await;

    Json(HealthReport {
        status: if connected { "healthy" } else { "unhealthy" },
        version: env!("CARGO_PKG_VERSION"),
        environment: state.settings.environment.clone(),
        database: if connected { "connected" } else { "disconnected" },
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Database-specific health check, with credentials stripped from the URL.
pub async fn database_health(State(state): State<AppState>) -> Json<DatabaseHealthReport> {
    let connected = state.db_pool.probe().await;

    Json(DatabaseHealthReport {
        database_status: if connected {
            "connected"
        } else {
            "disconnected"
        },
        database_url: if connected {
            redacted_host(&state.settings.database.url).to_string()
        } else {
            "not_configured".to_string()
        },
    })
}

pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    if state.db_pool.probe().await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
