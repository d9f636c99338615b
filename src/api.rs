//! HTTP API: the streaming chat endpoint and a health probe.

use axum::{
    extract::{Json, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{error, info};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    error::ChatError,
    llm::{LlmClient, TokenStream},
    models::ChatRequest,
    prompt, retrieval,
    stream::MarkerStreamProcessor,
};

/// How many chunks of context go into the prompt.
const MAX_CONTEXT_CHUNKS: usize = 3;

type EventStream = UnboundedReceiverStream<Result<Event, ChatError>>;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/api/health", get(health_handler))
        .with_state(app_state)
}

// --- Handlers ---

#[axum::debug_handler]
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// One visitor message in, one server-sent event stream out: incremental
/// `{content}` events with markers stripped, at most one `{action, filter}`
/// event, then the `[DONE]` sentinel.
#[axum::debug_handler]
async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Sse<EventStream>, ChatError> {
    if payload.message.is_empty() {
        return Err(ChatError::InvalidRequest);
    }

    let llm = LlmClient::from_config(&state.config, state.http.clone())?;

    if !state.rate_limiter.can_make_request() {
        return Err(ChatError::RateLimited {
            wait_secs: state.rate_limiter.wait_time_secs(),
        });
    }

    let request_id = Uuid::new_v4();
    info!(%request_id, history_turns = payload.conversation_history.len(), "chat request");

    let context = retrieval::retrieve(&payload.message, MAX_CONTEXT_CHUNKS);
    let messages =
        prompt::build_messages(&payload.message, &context, &payload.conversation_history);

    // Errors before any token flows still produce a plain JSON response.
    let tokens = llm.start_chat_stream(&messages).await.map_err(|e| {
        error!(%request_id, error = %e, "failed to open completion stream");
        e
    })?;

    let (tx, rx) = mpsc::unbounded_channel::<Result<Event, ChatError>>();
    tokio::spawn(pump_stream(request_id, tokens, tx));

    Ok(Sse::new(UnboundedReceiverStream::new(rx)).keep_alive(KeepAlive::default()))
}

/// Drive one completion stream through the marker processor and into the SSE
/// channel. Runs until the upstream source completes, fails, or the client
/// disconnects (observed as a closed channel).
async fn pump_stream(
    request_id: Uuid,
    mut tokens: TokenStream,
    tx: mpsc::UnboundedSender<Result<Event, ChatError>>,
) {
    let mut processor = MarkerStreamProcessor::new();

    loop {
        match tokens.next_token().await {
            Ok(Some(token)) => {
                if let Some(content) = processor.push(&token) {
                    if tx.send(Ok(content_event(&content))).is_err() {
                        // Client went away; stop pulling from upstream.
                        info!(%request_id, "client disconnected mid-stream");
                        return;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!(%request_id, error = %e, "completion stream failed");
                let _ = tx.send(Err(e));
                return;
            }
        }
    }

    let outcome = processor.finish();

    if let Some(remainder) = outcome.remainder {
        if tx.send(Ok(content_event(&remainder))).is_err() {
            return;
        }
    }
    if let Some(action) = outcome.action {
        info!(%request_id, ?action, "ui action detected");
        if tx.send(Ok(Event::default().data(json!(action).to_string()))).is_err() {
            return;
        }
    }
    let _ = tx.send(Ok(Event::default().data("[DONE]")));
}

fn content_event(content: &str) -> Event {
    Event::default().data(json!({ "content": content }).to_string())
}

#[cfg(test)]
mod tests {
    use crate::models::{ActionSignal, ProjectFilter, UiAction};
    use crate::stream::MarkerStreamProcessor;
    use serde_json::json;

    /// Produce the SSE payload strings the handler would push for a canned
    /// token sequence: content events, an optional action event, `[DONE]`.
    fn sse_payloads(tokens: &[&str]) -> Vec<String> {
        let mut payloads = Vec::new();
        let mut processor = MarkerStreamProcessor::new();
        for token in tokens {
            if let Some(content) = processor.push(token) {
                payloads.push(json!({ "content": content }).to_string());
            }
        }
        let outcome = processor.finish();
        if let Some(remainder) = outcome.remainder {
            payloads.push(json!({ "content": remainder }).to_string());
        }
        if let Some(action) = outcome.action {
            payloads.push(json!(action).to_string());
        }
        payloads.push("[DONE]".to_string());
        payloads
    }

    #[test]
    fn show_projects_reply_emits_action_and_no_marker_text() {
        let payloads = sse_payloads(&["Sure, here they are! ", "[SHOW_P", "ROJECTS]"]);

        assert!(payloads
            .iter()
            .any(|p| p == r#"{"action":"SHOW_PROJECTS","filter":"all"}"#));
        assert_eq!(payloads.last().unwrap(), "[DONE]");
        // No content event may carry marker text.
        for payload in payloads.iter().filter(|p| p.contains("content")) {
            assert!(!payload.contains("[SHOW_"), "leak in {payload}");
        }
    }

    #[test]
    fn frontend_projects_reply_carries_filter() {
        let payloads = sse_payloads(&["Here are the frontend ones ", "[SHOW_PROJECTS:frontend]"]);
        assert!(payloads
            .iter()
            .any(|p| p == r#"{"action":"SHOW_PROJECTS","filter":"frontend"}"#));
    }

    #[test]
    fn plain_reply_ends_with_done_and_no_action() {
        let payloads = sse_payloads(&["I build ", "web apps."]);

        assert_eq!(payloads.last().unwrap(), "[DONE]");
        assert!(!payloads.iter().any(|p| p.contains("SHOW_PROJECTS")));
        assert!(!payloads.iter().any(|p| p.contains("SHOW_SKILLS")));
        assert_eq!(payloads[0], r#"{"content":"I build "}"#);
        assert_eq!(payloads[1], r#"{"content":"web apps."}"#);
    }

    #[test]
    fn action_event_wire_shape() {
        let action = ActionSignal {
            action: UiAction::ShowProjects,
            filter: ProjectFilter::Frontend,
        };
        assert_eq!(
            json!(action).to_string(),
            r#"{"action":"SHOW_PROJECTS","filter":"frontend"}"#
        );
    }
}
