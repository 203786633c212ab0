use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    auth,
    config::Config,
    handlers::{self, analyze::AppState},
    session::{InFlightAnalyses, SessionStore},
};

/// Start the cost optimizer server
///
/// This function:
/// 1. Creates the shared session store and spawns its cleanup loop
/// 2. Creates the Axum application
/// 3. Binds to the configured address
/// 4. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    let config = Arc::new(config);

    let sessions = Arc::new(SessionStore::new(Duration::from_secs(
        config.auth.session_ttl_minutes * 60,
    )));

    // Background sweep of expired sessions
    tokio::spawn(sessions.clone().cleanup_loop());

    let app_state = AppState {
        config: config.clone(),
        sessions: sessions.clone(),
        analyses: Arc::new(InFlightAnalyses::new()),
    };

    let app = create_router(app_state, sessions);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting cost optimizer on {}", addr);
    info!(
        "Configuration: {} users, simulated latency {}ms, session TTL {}min",
        config.auth.users.len(),
        config.analysis.simulated_latency_ms,
        config.auth.session_ttl_minutes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(app_state: AppState, sessions: Arc<SessionStore>) -> Router {
    // Routes behind the session gate
    let auth_routes = Router::new()
        .route("/api/analyze", post(handlers::analyze::handle_analyze))
        .route("/api/strategies", get(handlers::strategies::list_strategies))
        .route("/api/report", post(handlers::report::handle_export))
        .route("/api/logout", post(handlers::login::handle_logout))
        .layer(middleware::from_fn_with_state(
            sessions,
            auth::auth_middleware,
        ))
        .with_state(app_state.clone());

    Router::new()
        // Public endpoints (no session required)
        .route("/health", get(handlers::health::health_check))
        .route("/api/login", post(handlers::login::handle_login))
        .with_state(app_state)
        .merge(auth_routes)
        // Form submissions are tiny; anything larger is a client bug
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Wait for SIGINT or SIGTERM
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

    info!("Shutdown signal received, draining connections...");
}
