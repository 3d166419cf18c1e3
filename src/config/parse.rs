//! Configuration file parsing and discovery

use crate::config::schema::validate_config;
use crate::config::types::LauncherConfig;
use crate::error::{CleanerError, ConfigError, ConfigResult};
use crate::launch::Verbosity;
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FILES_CLEANER_CONFIG";

/// Environment variable overriding `app_root`
pub const APP_ROOT_ENV: &str = "FILES_CLEANER_APP_ROOT";

/// Environment variable overriding `verbosity`
pub const LOG_ENV: &str = "FILES_CLEANER_LOG";

/// Config file name inside the platform config directory
const CONFIG_FILE_NAME: &str = "config.yml";

/// Default location of the config file, if the platform has one
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "files-cleaner")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Find the configuration file to use
///
/// An explicit path must exist. The default path is only used when present.
pub fn find_config_file(
    explicit: Option<PathBuf>,
    default: Option<PathBuf>,
) -> ConfigResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    Ok(default.filter(|path| path.is_file()))
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<LauncherConfig, CleanerError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<LauncherConfig, CleanerError> {
    // An empty document is a valid, empty configuration
    if yaml.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }

    let config: LauncherConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Apply environment overrides on top of a parsed configuration
pub fn apply_overrides(
    mut config: LauncherConfig,
    app_root: Option<String>,
    log: Option<String>,
) -> ConfigResult<LauncherConfig> {
    if let Some(root) = app_root.filter(|r| !r.is_empty()) {
        config.app_root = Some(PathBuf::from(root));
    }

    if let Some(level) = log.filter(|l| !l.is_empty()) {
        let verbosity = level.parse::<Verbosity>().map_err(ConfigError::Invalid)?;
        config.verbosity = Some(verbosity);
    }

    Ok(config)
}

/// Load the configuration from the file system and environment
pub fn load_config() -> Result<LauncherConfig, CleanerError> {
    let explicit = env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    let config = match find_config_file(explicit, default_config_path())? {
        Some(path) => parse_config_file(&path)?,
        None => LauncherConfig::default(),
    };

    let config = apply_overrides(config, env::var(APP_ROOT_ENV).ok(), env::var(LOG_ENV).ok())?;
    validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_simple_config() {
        let config = parse_config("app_root: /opt/cleaner\n").unwrap();
        assert_eq!(config.app_root, Some(PathBuf::from("/opt/cleaner")));
        assert_eq!(config.entry_point, None);
    }

    #[test]
    fn test_parse_empty_document() {
        let config = parse_config("   \n").unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_config("app_root: [unclosed\n");
        assert!(matches!(result, Err(CleanerError::Yaml(_))));
    }

    #[test]
    fn test_find_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("cleaner.yml");
        fs::write(&config_path, "entry_point: app.py\n").unwrap();

        let found = find_config_file(Some(config_path.clone()), None).unwrap();
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_missing_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let result = find_config_file(Some(temp_dir.path().join("nope.yml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_missing_default_config_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let found = find_config_file(None, Some(temp_dir.path().join(CONFIG_FILE_NAME))).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_explicit_config_wins_over_default() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("explicit.yml");
        let default = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&explicit, "").unwrap();
        fs::write(&default, "").unwrap();

        let found = find_config_file(Some(explicit.clone()), Some(default)).unwrap();
        assert_eq!(found, Some(explicit));
    }

    #[test]
    fn test_parse_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "app_root: /srv/app\nverbosity: quiet\n").unwrap();

        let config = parse_config_file(&config_path).unwrap();
        assert_eq!(config.app_root, Some(PathBuf::from("/srv/app")));
        assert_eq!(config.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = parse_config("app_root: /srv/app\n").unwrap();
        let config = apply_overrides(
            config,
            Some("/opt/other".to_string()),
            Some("verbose".to_string()),
        )
        .unwrap();

        assert_eq!(config.app_root, Some(PathBuf::from("/opt/other")));
        assert_eq!(config.verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let config = parse_config("app_root: /srv/app\n").unwrap();
        let config = apply_overrides(config, Some(String::new()), None).unwrap();
        assert_eq!(config.app_root, Some(PathBuf::from("/srv/app")));
    }

    #[test]
    fn test_invalid_log_override() {
        let result = apply_overrides(LauncherConfig::default(), None, Some("loud".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
