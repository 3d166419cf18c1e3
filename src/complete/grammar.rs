//! Grammar table of the files-cleaner application
//!
//! Completion only needs to know which tokens are valid at each level of the
//! command line. Subcommands are an enum so every one of them has a flag set.

use clap::{Arg, ArgAction, Command};

/// Subcommands understood by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Del,
    Edit,
    Generate,
}

/// Flags valid in place of a subcommand
pub const GLOBAL_FLAGS: &[&str] = &["-h", "--help", "--manual", "--version"];

impl Subcommand {
    /// All subcommands, in the order they are offered
    pub const ALL: [Subcommand; 3] = [Subcommand::Del, Subcommand::Edit, Subcommand::Generate];

    /// Parse a subcommand token
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sub| sub.name() == token)
    }

    /// Token naming this subcommand
    pub fn name(self) -> &'static str {
        match self {
            Subcommand::Del => "del",
            Subcommand::Edit => "edit",
            Subcommand::Generate => "generate",
        }
    }

    /// Tokens allowed after this subcommand
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Subcommand::Del => &["-p", "--path=", "-n", "--negated", "-g", "--glob"],
            Subcommand::Edit => &["-l", "--line-endings"],
            Subcommand::Generate => &["system_executable"],
        }
    }

    /// Whether the application needs a working path for this subcommand
    pub fn takes_path(self) -> bool {
        matches!(self, Subcommand::Del | Subcommand::Edit)
    }
}

/// Tokens allowed directly after the program name
pub fn top_level() -> impl Iterator<Item = &'static str> {
    Subcommand::ALL
        .into_iter()
        .map(Subcommand::name)
        .chain(GLOBAL_FLAGS.iter().copied())
}

/// Build a clap model of the application's command line
///
/// Used to generate static completion scripts for shells without the
/// dynamic hook.
pub fn grammar_command(bin_name: &str) -> Command {
    let negated = Arg::new("negated")
        .short('n')
        .long("negated")
        .help("Clean everything except the specified patterns")
        .action(ArgAction::SetTrue);
    let glob = Arg::new("glob")
        .short('g')
        .long("glob")
        .help("Treat patterns as glob patterns")
        .action(ArgAction::SetTrue);
    let patterns = Arg::new("patterns")
        .value_name("PATTERNS")
        .num_args(1..)
        .help("Patterns of files to work on");

    Command::new(bin_name.to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recursively delete or clean up files matching patterns")
        .arg(
            Arg::new("manual")
                .long("manual")
                .help("Show the application manual page")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new(Subcommand::Del.name())
                .about("Delete files and folders matching patterns")
                .arg(
                    Arg::new("path")
                        .short('p')
                        .long("path")
                        .value_name("PATH")
                        .value_hint(clap::ValueHint::DirPath)
                        .help("Working directory"),
                )
                .arg(negated)
                .arg(glob)
                .arg(patterns.clone()),
        )
        .subcommand(
            Command::new(Subcommand::Edit.name())
                .about("Convert line endings of files matching patterns")
                .arg(
                    Arg::new("line-endings")
                        .short('l')
                        .long("line-endings")
                        .help("Change line endings")
                        .action(ArgAction::SetTrue),
                )
                .arg(patterns),
        )
        .subcommand(
            Command::new(Subcommand::Generate.name())
                .about("Generate application resources")
                .arg(
                    Arg::new("target")
                        .value_name("TARGET")
                        .value_parser(["system_executable"]),
                ),
        )
}
