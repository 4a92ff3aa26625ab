//! Tool definitions offered to the model.
//!
//! The assistant has a single tool, `webSearch`, which the model calls when
//! a question needs real-time or internet-dependent information.

use serde_json::{json, Value};

use crate::{AiError, ToolDefinition};

/// Name the model uses to request a web search.
pub const WEB_SEARCH: &str = "webSearch";

/// The `webSearch` tool definition.
pub fn web_search_tool() -> ToolDefinition {
    ToolDefinition {
        name: WEB_SEARCH.to_string(),
        description: "Search the latest information and real time data on the internet."
            .to_string(),
        parameters: json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query to get the result from user input."
                }
            },
            "required": ["query"]
        }),
    }
}

/// Every tool offered to the model.
pub fn builtin_tools() -> Vec<ToolDefinition> {
    vec![web_search_tool()]
}

/// Convert a tool definition to the OpenAI function-calling format.
pub fn to_openai_tool(tool: &ToolDefinition) -> Value {
    json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters,
        }
    })
}

/// Extract the `query` argument of a `webSearch` call.
pub fn parse_query(arguments: &Value) -> Result<String, AiError> {
    match arguments.get("query").and_then(Value::as_str) {
        Some(query) if !query.trim().is_empty() => Ok(query.to_string()),
        _ => Err(AiError::ParseError(format!(
            "{WEB_SEARCH} expects a non-empty string 'query', got {arguments}"
        ))),
    }
}
