//! Configuration validation

use crate::config::types::LauncherConfig;
use crate::error::{ConfigError, ConfigResult};

/// Validate a launcher configuration
pub fn validate_config(config: &LauncherConfig) -> ConfigResult<()> {
    if let Some(app_root) = &config.app_root {
        if app_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("app_root cannot be empty".to_string()));
        }
    }

    if let Some(entry_point) = &config.entry_point {
        validate_entry_point(entry_point)?;
    }

    Ok(())
}

/// The entry point must name a file directly inside the app root
fn validate_entry_point(name: &str) -> ConfigResult<()> {
    if name.is_empty() {
        return Err(ConfigError::Invalid("entry_point cannot be empty".to_string()));
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ConfigError::Invalid(format!(
            "entry_point '{}' must be a file name, not a path",
            name
        )));
    }

    Ok(())
}
