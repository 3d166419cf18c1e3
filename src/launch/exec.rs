//! Process handover
//!
//! On Unix the dispatcher's process image is replaced by the application.
//! Elsewhere the application runs as a child and its exit code is forwarded.

use crate::error::{LaunchError, LaunchResult};
use std::convert::Infallible;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Placeholder passed as the application's `argv[0]`
pub const ARGV0_PLACEHOLDER: &str = " ";

/// Build the command that runs `entry_point` with `args`
///
/// The working directory is inherited, so the caller changes it first.
pub fn build_command(entry_point: &Path, args: &[OsString]) -> Command {
    let mut command = Command::new(entry_point);

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.arg0(ARGV0_PLACEHOLDER);
    }

    command.args(args);
    command
}

/// Replace the current process with `command`
///
/// Only returns when the handover failed.
#[cfg(unix)]
pub fn replace_process(mut command: Command) -> LaunchResult<Infallible> {
    use std::os::unix::process::CommandExt;

    // exec() only returns on error
    let err = command.exec();
    Err(LaunchError::Exec {
        path: command.get_program().into(),
        error: err.to_string(),
    })
}

/// Run `command` as a child and exit with its status
#[cfg(not(unix))]
pub fn replace_process(mut command: Command) -> LaunchResult<Infallible> {
    let status = command.status().map_err(|e| LaunchError::Exec {
        path: command.get_program().into(),
        error: e.to_string(),
    })?;

    std::process::exit(status.code().unwrap_or(1))
}
