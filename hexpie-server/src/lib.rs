//! HEXPIE Server - HTTP API for the board frontend
//!
//! This crate provides the web backend:
//! - REST API over a shared game engine (move, swap, undo, snapshot)
//! - Static file serving for the browser board

mod routes;
mod state;

use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub board_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            static_dir: "hexpie/frontend".to_string(),
            board_size: hexpie_core::DEFAULT_SIZE,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Game API
        .route("/api/game/new", post(routes::game::new_game))
        .route("/api/game/move", post(routes::game::make_move))
        .route("/api/game/swap", post(routes::game::swap))
        .route("/api/game/undo", post(routes::game::undo))
        .route("/api/game/state", get(routes::game::get_state))
        .route("/api/game/load", post(routes::game::load_state))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.board_size));
    let router = create_router(&config, state);

    tracing::info!("HEXPIE Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
