// Application modules
mod api;
mod app_state;
mod chunks;
mod config;
mod error;
mod llm;
mod models;
mod prompt;
mod rate_limiter;
mod retrieval;
mod stream;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app_state::AppState;
use crate::rate_limiter::RateLimiter;

#[tokio::main]
async fn main() {
    // 1. Load .env and initialize logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Load configuration
    let cfg = config::AppConfig::from_env().expect("failed to load configuration");
    if cfg.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; the chat endpoint will reject requests until it is");
    }

    // 3. Create shared application state
    let app_state = AppState {
        config: cfg.clone(),
        http: reqwest::Client::new(),
        rate_limiter: Arc::new(RateLimiter::for_chat()),
    };

    // 4. Configure the API router and the static file service
    let app = Router::new()
        .merge(api::create_router(app_state.clone()))
        .fallback_service(ServeDir::new("frontend"))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // 5. Start the server
    let server_addr = &app_state.config.server_addr;
    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .unwrap();
    info!("🚀 Server listening on http://{}", server_addr);

    // Graceful shutdown on Ctrl-C.
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received, closing the server.");
        })
        .await
        .unwrap();

    info!("✅ Server stopped cleanly.");
}
