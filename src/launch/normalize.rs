//! Argument normalization
//!
//! `del` and `edit` work on a directory. When the user did not pass one, the
//! directory the dispatcher was started from is used.

use crate::complete::Subcommand;
use std::ffi::OsString;
use std::path::Path;

/// Whether the arguments already carry a working path
///
/// Only `-p` and `--path=<value>` are recognized; a bare `--path` is not.
pub fn has_path_arg(args: &[OsString]) -> bool {
    args.iter().any(|a| a == "-p" || a.as_encoded_bytes().starts_with(b"--path="))
}

/// Whether some argument names a subcommand that works on a path
pub fn needs_path(args: &[OsString]) -> bool {
    args.iter()
        .filter_map(|a| a.to_str().and_then(Subcommand::parse))
        .any(Subcommand::takes_path)
}

/// Append `--path=<invocation_dir>` when a path is needed but missing
///
/// The directory is appended byte for byte, so names that are not valid
/// UTF-8 survive.
pub fn normalize_args(mut args: Vec<OsString>, invocation_dir: &Path) -> Vec<OsString> {
    if !has_path_arg(&args) && needs_path(&args) {
        let mut flag = OsString::from("--path=");
        flag.push(invocation_dir.as_os_str());
        args.push(flag);
    }
    args
}
