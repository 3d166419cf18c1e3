//! Launch context
//!
//! The context carries the resolved directories and output settings for one
//! launch.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Verbosity levels for dispatcher output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silent" => Ok(Verbosity::Silent),
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" | "debug" => Ok(Verbosity::Verbose),
            other => Err(format!("unknown verbosity '{}'", other)),
        }
    }
}

/// State for one launch of the application
#[derive(Debug, Clone)]
pub struct LaunchContext {
    /// Directory the user ran the dispatcher from
    pub invocation_dir: PathBuf,

    /// Installation directory of the application
    pub app_root: PathBuf,

    /// Entry point file name, when not discovered
    pub entry_point: Option<String>,

    /// Verbosity level
    pub verbosity: Verbosity,
}

impl LaunchContext {
    pub fn new(invocation_dir: PathBuf, app_root: PathBuf) -> Self {
        LaunchContext {
            invocation_dir,
            app_root,
            entry_point: None,
            verbosity: Verbosity::Normal,
        }
    }

    /// Use a fixed entry point file name
    pub fn with_entry_point(mut self, entry_point: Option<String>) -> Self {
        self.entry_point = entry_point;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Print debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("[DEBUG] {}", message);
        }
    }
}
