use std::sync::Arc;

use crate::{config::AppConfig, rate_limiter::RateLimiter};

/// Shared state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// One HTTP client for the whole process; per-request LLM handles borrow
    /// its connection pool.
    pub http: reqwest::Client,
    pub rate_limiter: Arc<RateLimiter>,
}
