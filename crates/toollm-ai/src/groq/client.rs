//! Groq client struct, request building, and response parsing.

use std::time::Duration;

use serde_json::{json, Value};

use crate::tools::to_openai_tool;
use crate::{AiError, AiResponse, Message, Role, TokenUsage, ToolCall, ToolDefinition};

use super::config::GroqConfig;

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body for the chat-completions API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Value {
        let msgs: Vec<Value> = messages.iter().map(encode_message).collect();

        let mut body = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": msgs,
        });

        if let Some(max_tokens) = self.config.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_openai_tool).collect();
            body["tools"] = json!(tool_defs);
            body["tool_choice"] = json!("auto");
        }

        body
    }

    /// Parse a chat-completions response, reading the first choice.
    pub(crate) fn parse_response(&self, json: Value) -> Result<AiResponse, AiError> {
        let message = json["choices"]
            .get(0)
            .map(|choice| &choice["message"])
            .ok_or_else(|| AiError::ParseError("response has no choices".into()))?;
        if !message.is_object() {
            return Err(AiError::ParseError("response choice has no message".into()));
        }

        let content = message["content"].as_str().unwrap_or_default().to_string();

        let tool_calls = message["tool_calls"]
            .as_array()
            .map(|calls| calls.iter().map(decode_tool_call).collect())
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse {
            content,
            tool_calls,
            usage,
        })
    }
}

fn encode_message(msg: &Message) -> Value {
    match msg.role {
        Role::Assistant if !msg.tool_calls.is_empty() => {
            let calls: Vec<Value> = msg.tool_calls.iter().map(encode_tool_call).collect();
            let content = if msg.content.is_empty() {
                Value::Null
            } else {
                json!(msg.content)
            };
            json!({
                "role": "assistant",
                "content": content,
                "tool_calls": calls,
            })
        }
        Role::Tool => json!({
            "role": "tool",
            "tool_call_id": msg.tool_call_id,
            "name": msg.name,
            "content": msg.content,
        }),
        role => json!({
            "role": role.as_str(),
            "content": msg.content,
        }),
    }
}

/// The wire format carries arguments as a JSON-encoded string.
fn encode_tool_call(call: &ToolCall) -> Value {
    let arguments = match &call.arguments {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    };
    json!({
        "id": call.id,
        "type": "function",
        "function": {
            "name": call.name,
            "arguments": arguments,
        }
    })
}

/// Arguments that fail to parse are kept verbatim as a string value.
fn decode_tool_call(call: &Value) -> ToolCall {
    let raw = call["function"]["arguments"].as_str().unwrap_or("{}");
    let arguments =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    ToolCall {
        id: call["id"].as_str().unwrap_or("").to_string(),
        name: call["function"]["name"].as_str().unwrap_or("").to_string(),
        arguments,
    }
}
