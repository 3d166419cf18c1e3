//! Main CLI application
//!
//! The dispatcher forwards its arguments to the application untouched,
//! except for the hidden completion entries which are parsed with clap.

use crate::complete::{write_script, Completion, Resolver, COMPLETE_COMMAND, SCRIPT_COMMAND};
use crate::config::{load_config, LauncherConfig};
use crate::error::{CleanerError, LaunchError};
use crate::launch::{launch, LaunchContext};
use clap::{Arg, ArgMatches, Command};
use clap_complete::Shell;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

/// Name the dispatcher is installed under
pub const BIN_NAME: &str = "files-cleaner-cli";

/// Build the clap command for the hidden completion entries
pub fn build_command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Dispatcher for the files-cleaner application")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMPLETE_COMMAND)
                .about("Print completion candidates for a partial command line")
                .hide(true)
                .arg(
                    Arg::new("cword")
                        .long("cword")
                        .value_name("INDEX")
                        .help("Index of the word under the cursor")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("words")
                        .value_name("WORDS")
                        .help("Words of the command line, program name first")
                        .num_args(0..)
                        .last(true)
                        .value_parser(clap::value_parser!(OsString))
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new(SCRIPT_COMMAND)
                .about("Print the completion registration script for a shell")
                .hide(true)
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

/// Write a completion in the format the bash hook reads
///
/// The first line holds the directives, then one candidate per line.
pub fn write_completion<W: Write>(completion: &Completion, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", completion.directives())?;
    for candidate in &completion.candidates {
        writeln!(out, "{}", candidate)?;
    }
    Ok(())
}

/// Words passed to `__complete`, with invalid UTF-8 replaced
fn completion_words(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<OsString>("words")
        .map(|words| words.map(|w| w.to_string_lossy().into_owned()).collect())
        .unwrap_or_default()
}

/// Answer a completion request; never fails
fn run_complete(args: &[OsString]) {
    let matches = match build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(_) => return,
    };

    if let Some(sub) = matches.subcommand_matches(COMPLETE_COMMAND) {
        let cword = sub.get_one::<usize>("cword").copied().unwrap_or(0);
        let words = completion_words(sub);
        let completion = Resolver::from_env().resolve(&words, cword);

        let stdout = io::stdout();
        let _ = write_completion(&completion, &mut stdout.lock());
    }
}

/// Print a registration script
fn run_script(args: &[OsString]) -> Result<(), CleanerError> {
    let matches = build_command().try_get_matches_from(args)?;

    if let Some(sub) = matches.subcommand_matches(SCRIPT_COMMAND) {
        if let Some(shell) = sub.get_one::<Shell>("shell") {
            let stdout = io::stdout();
            write_script(*shell, BIN_NAME, &mut stdout.lock())?;
        }
    }

    Ok(())
}

/// Build the launch context from the configuration
pub fn launch_context(config: &LauncherConfig) -> Result<LaunchContext, CleanerError> {
    let invocation_dir = env::current_dir().map_err(|e| LaunchError::InvalidDirectory {
        path: PathBuf::from("."),
        error: e.to_string(),
    })?;

    let app_root = match &config.app_root {
        Some(root) => root.clone(),
        None => executable_dir()?,
    };

    Ok(LaunchContext::new(invocation_dir, app_root)
        .with_entry_point(config.entry_point.clone())
        .with_verbosity(config.verbosity()))
}

/// Directory containing the running dispatcher
fn executable_dir() -> Result<PathBuf, LaunchError> {
    let exe = env::current_exe().map_err(|e| LaunchError::InvalidDirectory {
        path: PathBuf::from(BIN_NAME),
        error: e.to_string(),
    })?;

    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| LaunchError::InvalidDirectory {
            path: exe.clone(),
            error: "executable has no parent directory".to_string(),
        })
}

/// Dispatch on the given argument vector (program name first)
pub fn run_with_args(args: Vec<OsString>) -> Result<(), CleanerError> {
    match args.get(1).and_then(|a| a.to_str()) {
        Some(COMPLETE_COMMAND) => {
            run_complete(&args);
            Ok(())
        }
        Some(SCRIPT_COMMAND) => run_script(&args),
        _ => {
            let config = load_config()?;
            let ctx = launch_context(&config)?;
            let forwarded: Vec<OsString> = args.into_iter().skip(1).collect();

            match launch(forwarded, &ctx)? {}
        }
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> Result<(), CleanerError> {
    run_with_args(env::args_os().collect())
}
