//! Wire and domain types for the chat API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
///
/// `message` is required; an absent or empty message is rejected by the
/// handler. History is optional and defaults to an empty conversation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ConversationTurn>,
}

/// One prior exchange in the conversation, as stored by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub text: String,
}

/// Who authored a conversation turn. The frontend sends `"user"` / `"bot"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Coarse intent category derived from the raw visitor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Projects,
    Experience,
    Skills,
    Contact,
    General,
}

/// UI action encoded by a marker in the assistant response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiAction {
    ShowProjects,
    ShowSkills,
}

/// Project-list filter carried alongside a [`UiAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFilter {
    Fullstack,
    Frontend,
    All,
}

/// Structured action event derived from the final accumulated response.
/// Emitted at most once, at stream end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionSignal {
    pub action: UiAction,
    pub filter: ProjectFilter,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_with_history() {
        let body = json!({
            "message": "What did you build at NSIA?",
            "conversationHistory": [
                { "sender": "user", "text": "hi" },
                { "sender": "bot", "text": "hello!" }
            ]
        });
        let req: ChatRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.message, "What did you build at NSIA?");
        assert_eq!(req.conversation_history.len(), 2);
        assert_eq!(req.conversation_history[0].sender, Sender::User);
        assert_eq!(req.conversation_history[1].sender, Sender::Bot);
    }

    #[test]
    fn chat_request_defaults() {
        let req: ChatRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.message.is_empty());
        assert!(req.conversation_history.is_empty());
    }

    #[test]
    fn malformed_sender_is_rejected() {
        let body = json!({
            "message": "hi",
            "conversationHistory": [{ "sender": "assistant", "text": "x" }]
        });
        assert!(serde_json::from_value::<ChatRequest>(body).is_err());
    }

    #[test]
    fn action_signal_wire_format() {
        let signal = ActionSignal {
            action: UiAction::ShowProjects,
            filter: ProjectFilter::Fullstack,
        };
        assert_eq!(
            serde_json::to_value(signal).unwrap(),
            json!({ "action": "SHOW_PROJECTS", "filter": "fullstack" })
        );
    }
}
