//! Launcher configuration types
//!
//! This module defines the data structures that represent a `config.yml` file.

use crate::launch::Verbosity;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level launcher configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// Installation directory of the application
    #[serde(default)]
    pub app_root: Option<PathBuf>,

    /// File name of the application entry point inside `app_root`
    #[serde(default)]
    pub entry_point: Option<String>,

    /// Output verbosity of the dispatcher itself
    #[serde(default)]
    pub verbosity: Option<Verbosity>,
}

impl LauncherConfig {
    /// Verbosity to use, falling back to `Normal`
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity.unwrap_or(Verbosity::Normal)
    }
}
