use axum::{
    extract::{DefaultBodyLimit, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::CorsConfig;
use crate::handlers::{ai, auth, health, thoughts, users};
use crate::state::AppState;

#[derive(Serialize)]
pub struct WelcomeResponse {
    message: String,
    docs: &'static str,
    health: &'static str,
}

async fn root(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!("Welcome to {} API", state.settings.api.project_name),
        docs: "/api/docs",
        health: "/health",
    })
}

/// Route groups mounted under the API prefix.
fn api_router() -> Router<AppState> {
    let health_routes = Router::new()
        .route("/", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/database", get(health::database_health));

    let auth_routes = Router::new()
        .route("/register", post(auth::register_user))
        .route("/login", post(auth::login_user))
        .route("/logout", post(auth::logout_user))
        .route("/me", get(auth::current_user));

    let user_routes = Router::new().route("/", get(users::list_users)).route(
        "/{user_id}",
        get(users::get_user)
            .put(users::update_user)
            .delete(users::delete_user),
    );

    let thought_routes = Router::new()
        .route(
            "/",
            get(thoughts::list_thoughts).post(thoughts::create_thought),
        )
        .route(
            "/{thought_id}",
            get(thoughts::get_thought)
                .put(thoughts::update_thought)
                .delete(thoughts::delete_thought),
        );

    let ai_routes = Router::new()
        .route("/suggestions", post(ai::content_suggestions))
        .route("/categorize", post(ai::categorize_content))
        .route("/sentiment", post(ai::analyze_sentiment))
        .route("/moderate", post(ai::moderate_content));

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/thoughts", thought_routes)
        .nest("/ai", ai_routes)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "skipping unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .nest(&state.settings.api.prefix, api_router())
        .layer(cors_layer(&state.settings.cors))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(state.settings.limits.max_upload_bytes))
        .with_state(state)
}
