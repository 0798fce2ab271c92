use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};

use thoughts_api_server::config::Settings;
use thoughts_api_server::database::DbPool;
use thoughts_api_server::routes::build_app;
use thoughts_api_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,thoughts_api_server=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting Thoughts API server...");

    // Load configuration; any validation failure aborts startup
    let settings = Settings::load()?;
    info!(environment = %settings.environment, "Configuration loaded");

    if settings.sentry_dsn.is_some() {
        info!("Error-tracking DSN configured");
    }

    // Initialize database pool; the URL is validated here, reachability is
    // reported through health rather than blocking startup
    let db_pool = DbPool::new(&settings.database)?;
    if db_pool.probe().await {
        info!("Database connection established");
    } else {
        warn!("Database unreachable at startup; health will report disconnected");
    }

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    let state = AppState::new(settings, db_pool.clone());
    let app = build_app(state);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Dispose the pool after in-flight requests have drained
    db_pool.close().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
