//! Error types for the files-cleaner dispatcher

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dispatcher operations
pub type Result<T> = std::result::Result<T, CleanerError>;

/// Main error type for the dispatcher
#[derive(Error, Debug)]
pub enum CleanerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors while handing control to the application
    #[error("Launch error: {0}")]
    Launch(#[from] LaunchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed internal command line
    #[error("{0}")]
    Cli(#[from] clap::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },
}

/// Fatal errors raised while launching the application
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Cannot resolve directory '{path}': {error}")]
    InvalidDirectory { path: PathBuf, error: String },

    #[error("Application entry point not found in '{0}'")]
    EntryPointNotFound(PathBuf),

    #[error("Application entry point '{0}' is not executable")]
    NotExecutable(PathBuf),

    #[error("Cannot change directory to '{path}': {error}")]
    ChangeDirectory { path: PathBuf, error: String },

    #[error("Failed to execute '{path}': {error}")]
    Exec { path: PathBuf, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for launch operations
pub type LaunchResult<T> = std::result::Result<T, LaunchError>;
