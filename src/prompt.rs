//! Prompt assembly for the chat completion request.
//!
//! Builds the system instruction from the retrieved context, detects whether
//! the visitor speaks about Habeeb in the third person or addresses him
//! directly, and appends the recent conversation history plus the current
//! message.

use std::sync::LazyLock;

use regex::Regex;

use crate::llm::{ChatMessage, Role};
use crate::models::{ConversationTurn, Sender};

/// Only the most recent turns are forwarded to the model.
pub const MAX_HISTORY_TURNS: usize = 4;

static THIRD_PERSON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(he|his|him|habeeb|habeeb'?s)\b").unwrap());

/// True when the visitor refers to Habeeb in the third person.
pub fn is_third_person(message: &str) -> bool {
    THIRD_PERSON_RE.is_match(message)
}

const THIRD_PERSON_RULES: &str = r#"- User is asking about Habeeb in THIRD PERSON - respond using "he/his/him/Habeeb"
- Example: "He built...", "His experience includes...", "Habeeb has worked on...""#;

const SECOND_PERSON_RULES: &str = r#"- User is addressing Habeeb directly in SECOND PERSON - respond using "I/my/me" as if you ARE Habeeb
- Example: "I built...", "My experience includes...", "I've worked on...""#;

/// Build the system instruction for one request.
fn system_prompt(context: &str, third_person: bool) -> String {
    let perspective_rules = if third_person {
        THIRD_PERSON_RULES
    } else {
        SECOND_PERSON_RULES
    };

    format!(
        r#"You are Habeeb's AI assistant. Answer questions about Habeeb Owoade using ONLY the context below. Be conversational, detailed, and engaging.

CONTEXT:
{context}

CRITICAL RULES:
- Provide COMPREHENSIVE, DETAILED responses - go into depth!
- When discussing experience or projects, include specific achievements, metrics, technologies, and impact
- Use bullet points for lists and structure longer responses clearly
- Format ALL URLs as proper clickable markdown links in this EXACT format: [Link Text](full-url)
- For project links in context, use them EXACTLY as provided: [View Project](https://example.com/)
- NEVER create broken or partial links - always include the full URL from the context
- NEVER say "Unfortunately", "The context does not provide", or "Check his portfolio"
- You ARE the portfolio - provide direct, detailed answers
- When mentioning "see all skills" or "full list of technologies", ALWAYS link to: [see his full list of technologies](/#skills)
- When mentioning "view all projects" or "see his projects", link to: [view his projects](/#projects)

PERSPECTIVE RULES:
{perspective_rules}

RESPONSE STYLE:
- For experience questions: Detail each role, responsibilities, achievements, tech stack, and impact
- For technical questions: Explain technologies used, how they were applied, and outcomes
- For project questions: Describe features, challenges solved, technologies, and results with proper markdown links from context
- Use concrete examples and specific details from the context
- Make responses informative and thorough - don't hold back on relevant details!
- When the context contains a link like "Live: https://example.com/", format it as: [View Project](https://example.com/)
- When the context contains "GitHub: github.com/username/repo", format it as: [GitHub](https://github.com/username/repo)
- ALWAYS include full URLs in links - never truncate or shorten them

SPECIAL UI TRIGGERS (USE VERY CAREFULLY):
- ONLY use [SHOW_PROJECTS] when user explicitly asks to SEE/VIEW/SHOW projects
- Examples that SHOULD trigger UI: "show me your projects", "display your work", "let me see what you've built"
- Examples that should NOT trigger UI: "can he build X based on his projects", "what's his experience", "has he worked on Y", "tell me about your experience"
- Questions ABOUT projects/experience = answer in DETAILED text with links
- Requests to SEE projects = use [SHOW_PROJECTS] marker
- For fullstack only: [SHOW_PROJECTS:fullstack]
- For frontend only: [SHOW_PROJECTS:frontend]
- For skills: Only use [SHOW_SKILLS] when user asks to SEE/VIEW skills, not when asking "what skills does he have"
- Default to DETAILED TEXT answers with markdown links unless user clearly wants a visual display"#
    )
}

/// Assemble the full message sequence: system instruction, the last
/// [`MAX_HISTORY_TURNS`] history entries, then the current user message.
pub fn build_messages(
    message: &str,
    context: &str,
    history: &[ConversationTurn],
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len().min(MAX_HISTORY_TURNS) + 2);
    messages.push(ChatMessage {
        role: Role::System,
        content: system_prompt(context, is_third_person(message)),
    });

    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    for turn in &history[start..] {
        messages.push(ChatMessage {
            role: match turn.sender {
                Sender::User => Role::User,
                Sender::Bot => Role::Assistant,
            },
            content: turn.text.clone(),
        });
    }

    messages.push(ChatMessage {
        role: Role::User,
        content: message.to_string(),
    });

    messages
}
