//! files-cleaner - dispatcher for the files-cleaner application
//!
//! The dispatcher offers shell completion for the application's command line
//! and launches the application with normalized arguments, defaulting the
//! working path of `del` and `edit` to the directory it was started from.

// Public modules
pub mod cli;
pub mod complete;
pub mod config;
pub mod error;
pub mod launch;

// Re-export commonly used types
pub use error::{CleanerError, Result};

/// Current version of the dispatcher
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
