//! Groq API client configuration.

use std::fmt;
use std::time::Duration;

use crate::AiError;

pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Groq API client configuration.
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    pub timeout: Duration,
}

impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GROQ_API_BASE.to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.0,
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }

    /// Create config from the `GROQ_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AiError::NotConfigured(format!("{API_KEY_VAR} is not set"))),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
