//! Configuration parsing and validation
//!
//! This module handles discovery and parsing of the launcher's `config.yml`,
//! environment overrides, and validation of the result.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
