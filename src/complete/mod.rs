//! Shell completion
//!
//! This module resolves completion candidates for partial command lines and
//! produces the scripts that register the resolver with a shell.

pub mod context;
pub mod grammar;
pub mod path;
pub mod resolver;
pub mod script;

// Re-export main types
pub use context::*;
pub use grammar::*;
pub use path::*;
pub use resolver::*;
pub use script::*;
