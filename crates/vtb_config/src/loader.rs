//! Configuration file discovery, loading and validation.

use crate::error::ConfigError;
use crate::types::VtbConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up by [`load_config`] and [`find_config`].
pub const CONFIG_FILE_NAME: &str = "vtb.toml";

/// Loads and validates `<dir>/vtb.toml`.
pub fn load_config(dir: &Path) -> Result<VtbConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<VtbConfig, ConfigError> {
    debug!(path = %path.display(), "loading configuration");
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `vtb.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<VtbConfig, ConfigError> {
    let config: VtbConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Walks up from `start` looking for the nearest `vtb.toml`.
///
/// Returns the path of the file, or `None` if no ancestor has one.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Checks that configuration values can produce a usable harness and path.
fn validate_config(config: &VtbConfig) -> Result<(), ConfigError> {
    if config.harness.clock_period.is_zero() {
        return Err(ConfigError::ValidationError(
            "harness.clock_period must be greater than zero".to_string(),
        ));
    }
    if config.harness.settle_time.is_zero() {
        return Err(ConfigError::ValidationError(
            "harness.settle_time must be greater than zero".to_string(),
        ));
    }

    let suffix = &config.output.suffix;
    if suffix.is_empty() {
        return Err(ConfigError::ValidationError(
            "output.suffix must not be empty".to_string(),
        ));
    }
    if suffix.contains(['/', '\\']) {
        return Err(ConfigError::ValidationError(format!(
            "output.suffix '{suffix}' must not contain path separators"
        )));
    }

    if let Some(ext) = &config.output.extension {
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(ConfigError::ValidationError(format!(
                "output.extension '{ext}' must be a bare extension such as \"vhd\""
            )));
        }
    }
    Ok(())
}
