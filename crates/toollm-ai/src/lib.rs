//! AI engine for ToolLM.
//!
//! Provides:
//! - an OpenAI-compatible chat-completion client (Groq by default)
//! - a web-search provider (Tavily)
//! - an expiring per-session conversation cache
//! - the tool-call loop tying them together
//! - token usage tracking

pub mod groq;
pub mod search;
pub mod session;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use groq::{GroqClient, GroqConfig};
pub use search::{SearchProvider, SearchResult, TavilyClient, TavilyConfig};
pub use session::{ChatEngine, EngineSettings, SessionCache};
pub use token_tracker::{TokenTracker, UsageSnapshot};

#[async_trait]
pub trait AiClient: Send + Sync {
    /// Short provider name used for usage tracking and logs.
    fn name(&self) -> &str;

    async fn send_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Tool invocations requested by an assistant turn.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    /// For `Role::Tool`: the invocation this result answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    /// For `Role::Tool`: the function that produced the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Message {
    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls,
            ..Self::plain(Role::Assistant, content)
        }
    }

    pub fn tool_result(call: &ToolCall, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(call.id.clone()),
            name: Some(call.name.clone()),
            ..Self::plain(Role::Tool, content)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Tool => "tool",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Search error: {0}")]
    Search(String),
    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl AiError {
    /// Classify a transport-level reqwest failure.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_result_links_back_to_call() {
        let call = ToolCall {
            id: "call_1".into(),
            name: "webSearch".into(),
            arguments: serde_json::json!({ "query": "rust 2024 edition" }),
        };
        let msg = Message::tool_result(&call, "snippet");
        assert_eq!(msg.role, Role::Tool);
        assert_eq!(msg.tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(msg.name.as_deref(), Some("webSearch"));
        assert_eq!(msg.content, "snippet");
    }

    #[test]
    fn plain_message_serializes_without_tool_fields() {
        let json = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));
    }

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::Search("HTTP 401".into()).to_string(),
            "Search error: HTTP 401"
        );
        assert_eq!(
            AiError::NotConfigured("GROQ_API_KEY is not set".into()).to_string(),
            "Not configured: GROQ_API_KEY is not set"
        );
    }
}
