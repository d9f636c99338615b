//! Application configuration loaded from the environment.

use std::env;

use anyhow::Result;

/// Complete application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,

    /// API key for the hosted completion API. The server boots without it;
    /// the chat endpoint answers `Misconfigured` until it is set.
    pub groq_api_key: Option<String>,
    pub llm_base_url: String,
    pub llm_chat_model: String,
}

impl AppConfig {
    /// Load configuration from environment variables (honoring `.env`).
    pub fn from_env() -> Result<Self> {
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3322".to_string());

        let groq_api_key = env::var("GROQ_API_KEY").ok().filter(|key| !key.is_empty());

        let llm_base_url = env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string());
        let llm_chat_model = env::var("LLM_CHAT_MODEL")
            .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        Ok(Self {
            server_addr,
            groq_api_key,
            llm_base_url,
            llm_chat_model,
        })
    }
}
