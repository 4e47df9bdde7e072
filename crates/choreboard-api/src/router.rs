//! Router configuration and server setup.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the router with the API, the front-end routes and CORS configured.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config))
        .allow_methods(Any)
        .allow_headers(Any);

    // ServeDir rejects `..` components, so requests stay inside the assets dir.
    let entry_page = ServeFile::new(state.config.entry_page_path());
    let assets = ServeDir::new(state.config.assets_dir());

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // State
        .route("/api/state", get(handlers::get_state))
        // Chores
        .route("/api/log_chore", post(handlers::log_chore))
        .route("/api/update_weekly_chore", post(handlers::update_weekly_chore))
        .route("/api/add_chore", post(handlers::add_chore))
        .route("/api/delete_chore", post(handlers::delete_chore))
        // Week
        .route("/api/reset_week", post(handlers::reset_week))
        // Front-end
        .route("/", get(handlers::index))
        .route_service(handlers::ENTRY_PATH, entry_page)
        .nest_service("/static", assets)
        .fallback(handlers::not_found)
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

fn allowed_origins(config: &ApiConfig) -> AllowOrigin {
    if config.allows_any_origin() {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

/// Starts the server and runs until Ctrl-C.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        address = %addr,
        data_file = %state.config.data_file.display(),
        "Choreboard listening"
    );
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
