//! Application launcher
//!
//! This module normalizes the dispatcher's arguments and hands the process
//! over to the files-cleaner application.

pub mod context;
pub mod entry;
pub mod exec;
pub mod normalize;

// Re-export main types
pub use context::*;
pub use entry::*;
pub use exec::*;
pub use normalize::*;

use crate::error::{LaunchError, LaunchResult};
use std::convert::Infallible;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `dir` to an absolute, canonical path
pub fn resolve_dir(dir: &Path) -> LaunchResult<PathBuf> {
    fs::canonicalize(dir).map_err(|e| LaunchError::InvalidDirectory {
        path: dir.to_path_buf(),
        error: e.to_string(),
    })
}

/// Normalize `args` and replace the process with the application
///
/// The invocation directory is resolved before the working directory
/// changes to the app root, so relative paths keep pointing where the user
/// stood. Only returns on failure.
pub fn launch(args: Vec<OsString>, ctx: &LaunchContext) -> LaunchResult<Infallible> {
    let invocation_dir = resolve_dir(&ctx.invocation_dir)?;
    let app_root = resolve_dir(&ctx.app_root)?;

    let args = normalize_args(args, &invocation_dir);
    let entry_point = find_entry_point(&app_root, ctx.entry_point.as_deref())?;

    ctx.print_debug(&format!("Invocation directory: {}", invocation_dir.display()));
    ctx.print_debug(&format!("App root: {}", app_root.display()));
    ctx.print_debug(&format!("Entry point: {}", entry_point.display()));
    ctx.print_debug(&format!("Arguments: {:?}", args));

    env::set_current_dir(&app_root).map_err(|e| LaunchError::ChangeDirectory {
        path: app_root.clone(),
        error: e.to_string(),
    })?;

    replace_process(build_command(&entry_point, &args))
}
