//! Tavily search API client (https://api.tavily.com/search).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AiError;

use super::{SearchProvider, SearchResult};

pub const TAVILY_API_BASE: &str = "https://api.tavily.com";
pub const API_KEY_VAR: &str = "TAVILY_API_KEY";

/// Tavily client configuration.
#[derive(Clone)]
pub struct TavilyConfig {
    pub api_key: String,
    pub base_url: String,
    pub max_results: u32,
    /// `basic` or `advanced`.
    pub search_depth: String,
    pub timeout: Duration,
}

impl fmt::Debug for TavilyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TavilyConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("max_results", &self.max_results)
            .field("search_depth", &self.search_depth)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TavilyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: TAVILY_API_BASE.to_string(),
            max_results: 5,
            search_depth: "basic".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create config from the `TAVILY_API_KEY` environment variable.
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

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_search_depth(mut self, depth: impl Into<String>) -> Self {
        self.search_depth = depth.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: u32,
    search_depth: &'a str,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Tavily search client.
pub struct TavilyClient {
    config: TavilyConfig,
    http: reqwest::Client,
}

impl TavilyClient {
    pub fn new(config: TavilyConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    fn api_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, AiError> {
        debug!(%query, "Tavily search request");

        let request = SearchRequest {
            query,
            max_results: self.config.max_results,
            search_depth: &self.config.search_depth,
        };

        let response = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(AiError::from_transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::Search(format!("HTTP {status}: {text}")));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        debug!(results = parsed.results.len(), "Tavily search response");
        Ok(parsed.results)
    }
}
