use serde::{Deserialize, Serialize};

/// Depth of a Tavily search.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

/// Web-search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    /// Results requested per query (valid range: 1-20).
    pub max_results: u32,
    pub search_depth: SearchDepth,
    /// Request timeout in seconds (valid range: 5-600).
    pub timeout_secs: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.tavily.com".into(),
            max_results: 5,
            search_depth: SearchDepth::Basic,
            timeout_secs: 30,
        }
    }
}
