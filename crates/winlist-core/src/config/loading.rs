//! Configuration loading.
//!
//! Configuration is resolved in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `<XDG config>/winlist/config.toml`, or the file given
//!    with `--config`
//! 3. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::WinlistConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path of the user config file, if a config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("winlist").join("config.toml"))
}

/// Load configuration from defaults and the user config file.
///
/// A missing user config file is not an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed, or if
/// the resulting configuration fails validation.
pub fn load_hierarchy() -> Result<WinlistConfig, ConfigError> {
    let Some(path) = user_config_path() else {
        debug!(event = "core.config.no_config_dir");
        return Ok(WinlistConfig::default());
    };

    match load_config_file(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ConfigNotFound { .. }) => {
            debug!(
                event = "core.config.user_config_missing",
                path = %path.display()
            );
            Ok(WinlistConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load and validate a configuration file from the given path.
///
/// Unlike [`load_hierarchy`], a missing file is an error here: the path was
/// requested explicitly.
pub fn load_config_file(path: &Path) -> Result<WinlistConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::ConfigParseError { message } => ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), message),
        },
        other => other,
    })?;

    debug!(
        event = "core.config.loaded",
        path = %path.display()
    );
    Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<WinlistConfig, ConfigError> {
    let config: WinlistConfig =
        toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}
