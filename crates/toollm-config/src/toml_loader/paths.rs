//! Where the config file lives, and writing the starter file there.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use toollm_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "toollm";
const CONFIG_FILE: &str = "config.toml";

/// `<base>/toollm/config.toml`.
pub fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// The config file under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_path_in(&base))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the commented template to `path`. An existing file is left as is.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            info!("keeping existing config at {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("created default config at {}", path.display());
    Ok(())
}
