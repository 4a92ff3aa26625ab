//! Environment variable overrides applied on top of the TOML file.

use toollm_common::ConfigError;
use tracing::info;

use crate::schema::ToolLmConfig;

/// Port override, as set by most hosting platforms.
pub const PORT_VAR: &str = "PORT";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut ToolLmConfig) -> Result<(), ConfigError> {
    apply_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides using `lookup` to resolve variables.
pub fn apply_overrides_from(
    config: &mut ToolLmConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(raw) = lookup(PORT_VAR) {
        let port = raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::ParseError(format!("invalid {PORT_VAR} '{raw}': {e}")))?;
        info!(port, "port overridden from environment");
        config.server.port = port;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn port_var_overrides_file_value() {
        let mut config = ToolLmConfig::default();
        apply_overrides_from(&mut config, lookup(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn missing_port_var_keeps_default() {
        let mut config = ToolLmConfig::default();
        apply_overrides_from(&mut config, lookup(&[])).unwrap();
        assert_eq!(config.server.port, 8001);
    }

    #[test]
    fn garbage_port_is_parse_error() {
        let mut config = ToolLmConfig::default();
        let err = apply_overrides_from(&mut config, lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains("PORT"));
    }
}
