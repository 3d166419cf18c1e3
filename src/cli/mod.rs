//! CLI interface
//!
//! This module dispatches between the hidden completion entries and the
//! application launcher.

pub mod app;

// Re-export main types
pub use app::*;
