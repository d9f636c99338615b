//! Error taxonomy for the chat pipeline.
//!
//! Every failure a client can observe maps to one of these kinds; upstream
//! detail is reduced to a short diagnostic string before it leaves the server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The request body is missing required input. No retry.
    #[error("message is required")]
    InvalidRequest,

    /// A required credential is absent. Operator-actionable, no retry.
    #[error("GROQ_API_KEY is not configured")]
    Misconfigured,

    /// The local guard tripped before contacting the upstream source.
    #[error("rate limited, retry in {wait_secs}s")]
    RateLimited { wait_secs: u64 },

    /// The completion API itself reported throttling.
    #[error("upstream quota exceeded")]
    UpstreamQuotaExceeded,

    /// Any other failure contacting or reading the completion API.
    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}

impl ChatError {
    fn status(&self) -> StatusCode {
        match self {
            ChatError::InvalidRequest => StatusCode::BAD_REQUEST,
            ChatError::Misconfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ChatError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ChatError::UpstreamQuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            ChatError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let body = match &self {
            ChatError::InvalidRequest => json!({ "error": "Message is required" }),
            ChatError::Misconfigured => json!({ "error": "GROQ_API_KEY is not configured" }),
            ChatError::RateLimited { wait_secs } => json!({
                "error": format!(
                    "⏳ Please wait {wait_secs} seconds before sending another message."
                ),
                "details": "Rate limit protection active",
            }),
            ChatError::UpstreamQuotaExceeded => json!({
                "error": "⏳ API quota limit reached. Please try again in a few minutes.",
                "details": "Rate limit exceeded.",
            }),
            ChatError::UpstreamFailure(detail) => json!({
                "error": "Failed to get response from AI",
                "details": detail,
            }),
        };
        (self.status(), Json(body)).into_response()
    }
}
