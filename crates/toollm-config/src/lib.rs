//! ToolLM configuration system.
//!
//! TOML-based configuration with environment overrides and validation.
//! All sections use defaults, so a missing or partial file works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use toollm_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::apply_env_overrides;
pub use schema::ToolLmConfig;

use std::path::Path;
use toollm_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`,
/// apply environment overrides and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ToolLmConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ToolLmConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
