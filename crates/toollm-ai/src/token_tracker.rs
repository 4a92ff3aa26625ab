//! Token usage tracking across completion calls.

use std::collections::HashMap;

use serde::Serialize;

use crate::TokenUsage;

/// Cumulative usage per provider plus call counters.
#[derive(Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_provider: HashMap<String, TokenUsage>,
    completion_calls: u64,
    search_calls: u64,
}

/// Point-in-time copy of the tracker, suitable for a stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UsageSnapshot {
    pub total: TokenUsage,
    pub by_provider: HashMap<String, TokenUsage>,
    pub completion_calls: u64,
    pub search_calls: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one completion call.
    pub fn record(&mut self, provider: &str, usage: &TokenUsage) {
        add(&mut self.total, usage);
        add(
            self.by_provider.entry(provider.to_string()).or_default(),
            usage,
        );
        self.completion_calls += 1;
    }

    /// Count one executed search.
    pub fn record_search(&mut self) {
        self.search_calls += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_provider(&self, provider: &str) -> Option<&TokenUsage> {
        self.by_provider.get(provider)
    }

    pub fn completion_calls(&self) -> u64 {
        self.completion_calls
    }

    pub fn search_calls(&self) -> u64 {
        self.search_calls
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            total: self.total,
            by_provider: self.by_provider.clone(),
            completion_calls: self.completion_calls,
            search_calls: self.search_calls,
        }
    }
}

fn add(acc: &mut TokenUsage, usage: &TokenUsage) {
    acc.input_tokens = acc.input_tokens.saturating_add(usage.input_tokens);
    acc.output_tokens = acc.output_tokens.saturating_add(usage.output_tokens);
}
