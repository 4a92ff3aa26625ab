//! Config validation.
//!
//! Collects every out-of-range value into a single `ConfigError`.

mod helpers;


use crate::schema::ToolLmConfig;
use helpers::{validate_range, validate_range_f64, validate_range_u64};
use toollm_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ToolLmConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push("server.host must not be empty".into());
    }
    if config.server.port == 0 {
        errors.push("server.port must not be 0".into());
    }

    if config.llm.model.trim().is_empty() {
        errors.push("llm.model must not be empty".into());
    }
    validate_range_f64(&mut errors, "llm.temperature", config.llm.temperature, 0.0, 2.0);
    validate_range(&mut errors, "llm.timeout_secs", config.llm.timeout_secs, 5, 600);
    if let Some(max_tokens) = config.llm.max_tokens {
        validate_range(&mut errors, "llm.max_tokens", max_tokens, 1, 131_072);
    }

    validate_range(&mut errors, "search.max_results", config.search.max_results, 1, 20);
    validate_range(&mut errors, "search.timeout_secs", config.search.timeout_secs, 5, 600);

    validate_range_u64(&mut errors, "session.ttl_secs", config.session.ttl_secs, 60, 604_800);
    validate_range_u64(
        &mut errors,
        "session.reap_interval_secs",
        config.session.reap_interval_secs,
        1,
        86_400,
    );

    validate_range(&mut errors, "chat.max_tool_rounds", config.chat.max_tool_rounds, 1, 20);
    if config.chat.fallback_message.trim().is_empty() {
        errors.push("chat.fallback_message must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
