//! Web search used to answer `webSearch` tool calls.

mod tavily;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AiError;

pub use tavily::{TavilyClient, TavilyConfig};

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run `query` and return results in rank order.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, AiError>;
}

/// A single ranked search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    /// Extracted page snippet; this is what the model sees.
    pub content: String,
    pub score: f64,
}

/// Join result snippets into the text of a tool message.
pub fn join_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
