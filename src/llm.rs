//! Streaming client for the Groq chat completions API (OpenAI wire format).
//!
//! The response body is consumed incrementally as server-sent events; the
//! caller pulls content tokens one at a time and so drives the pacing of the
//! whole pipeline.

use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::ChatError;

// Generation parameters are fixed, not computed.
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 800;
const TOP_P: f32 = 1.0;

/// Message role on the completion API wire.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One entry of the prompt message sequence.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Handle on the configured completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    /// Build a client from configuration. Fails with
    /// [`ChatError::Misconfigured`] when no API key is present.
    pub fn from_config(cfg: &AppConfig, client: reqwest::Client) -> Result<Self, ChatError> {
        let api_key = cfg
            .groq_api_key
            .clone()
            .ok_or(ChatError::Misconfigured)?;
        Ok(Self {
            client,
            base_url: cfg.llm_base_url.clone(),
            api_key,
            model: cfg.llm_chat_model.clone(),
        })
    }

    /// Open a streaming completion for `messages`. Errors raised here (bad
    /// status, unreachable host) happen before any token flows, so the
    /// caller can still answer with a plain JSON error response.
    pub async fn start_chat_stream(
        &self,
        messages: &[ChatMessage],
    ) -> Result<TokenStream, ChatError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "top_p": TOP_P,
            "stream": true,
        });

        debug!(url = %url, model = %self.model, "opening completion stream");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::UpstreamFailure(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, &body_text));
        }

        Ok(TokenStream {
            bytes: Box::pin(response.bytes_stream()),
            line_buffer: String::new(),
            done: false,
        })
    }
}

/// Map a non-success HTTP status to the error taxonomy.
fn map_http_error(status: reqwest::StatusCode, body: &str) -> ChatError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS || body.contains("quota") {
        ChatError::UpstreamQuotaExceeded
    } else {
        ChatError::UpstreamFailure(format!("HTTP {status}: {body}"))
    }
}

/// Pull-style source of content tokens from one open completion stream.
///
/// Not restartable; dropping it closes the upstream connection, which is how
/// a client disconnect propagates back to the completion API.
pub struct TokenStream {
    bytes: Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>,
    line_buffer: String,
    done: bool,
}

impl TokenStream {
    /// Next content token, `Ok(None)` once the stream has finished.
    pub async fn next_token(&mut self) -> Result<Option<String>, ChatError> {
        loop {
            if self.done {
                return Ok(None);
            }

            // Drain complete SSE lines already buffered.
            while let Some(pos) = self.line_buffer.find('\n') {
                let line = self.line_buffer[..pos].trim().to_string();
                self.line_buffer.drain(..=pos);

                if line == "data: [DONE]" {
                    self.done = true;
                    return Ok(None);
                }
                if let Some(event) = parse_sse_line(&line) {
                    if let Some(token) = delta_content(&event) {
                        if !token.is_empty() {
                            return Ok(Some(token));
                        }
                    }
                }
            }

            match self.bytes.next().await {
                Some(Ok(chunk)) => {
                    self.line_buffer.push_str(&String::from_utf8_lossy(&chunk));
                }
                Some(Err(e)) => {
                    return Err(ChatError::UpstreamFailure(format!(
                        "failed to read stream: {e}"
                    )));
                }
                None => {
                    self.done = true;
                    return Ok(None);
                }
            }
        }
    }
}

/// Parse a single SSE data line. Returns the parsed JSON if valid.
fn parse_sse_line(line: &str) -> Option<Value> {
    let data = line.strip_prefix("data: ")?;
    if data == "[DONE]" {
        return None;
    }
    serde_json::from_str(data).ok()
}

/// Extract `choices[0].delta.content` from a streaming chunk.
fn delta_content(event: &Value) -> Option<String> {
    event
        .get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
