use serde::{Deserialize, Serialize};
use toollm_common::{DEFAULT_FALLBACK_MESSAGE, DEFAULT_SYSTEM_PROMPT};

/// Tool-call loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Tool-call rounds allowed before giving up (valid range: 1-20).
    pub max_tool_rounds: u32,
    pub fallback_message: String,
    pub system_prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: 5,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
        }
    }
}
