use serde::{Deserialize, Serialize};

/// Chat-completion endpoint settings.
///
/// Any OpenAI-compatible endpoint works; the defaults target Groq.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Cap on completion tokens. `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds (valid range: 5-600).
    pub timeout_secs: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".into(),
            model: "llama-3.3-70b-versatile".into(),
            temperature: 0.0,
            max_tokens: None,
            timeout_secs: 120,
        }
    }
}
