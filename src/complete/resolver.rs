//! Completion resolver
//!
//! Turns a partial command line into the list of valid next tokens.

use crate::complete::context::CompletionContext;
use crate::complete::grammar;
use crate::complete::path::{effective_prefix, escape_spaces, matching_entries};
use directories::BaseDirs;
use regex::Regex;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Result of a completion request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Candidates, in display order
    pub candidates: Vec<String>,

    /// Candidates are file names; the shell should match them as such
    pub filenames: bool,

    /// The shell should not append a space after insertion
    pub no_space: bool,
}

impl Completion {
    fn words(candidates: Vec<String>) -> Self {
        let no_space = candidates.first().is_some_and(|c| is_value_flag(c));
        Completion {
            candidates,
            filenames: false,
            no_space,
        }
    }

    fn paths(candidates: Vec<String>) -> Self {
        Completion {
            candidates,
            filenames: true,
            no_space: true,
        }
    }

    /// Whether nothing can be offered
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Directives for the shell hook, space separated
    pub fn directives(&self) -> String {
        let mut out = Vec::new();
        if self.filenames {
            out.push("filenames");
        }
        if self.no_space {
            out.push("nospace");
        }
        out.join(" ")
    }
}

/// `--name=` with nothing after the equals sign
fn is_value_flag(token: &str) -> bool {
    static VALUE_FLAG: OnceLock<Regex> = OnceLock::new();
    VALUE_FLAG
        .get_or_init(|| Regex::new(r"^--[A-Za-z0-9][A-Za-z0-9_-]*=$").unwrap())
        .is_match(token)
}

/// Resolves completions against the grammar table and the filesystem
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Directory relative paths are completed in
    cwd: PathBuf,

    /// Home directory for `~/` expansion
    home: Option<PathBuf>,
}

impl Resolver {
    pub fn new(cwd: PathBuf, home: Option<PathBuf>) -> Self {
        Resolver { cwd, home }
    }

    /// Build a resolver for the current process
    pub fn from_env() -> Self {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Resolver::new(cwd, home_dir())
    }

    /// Resolve the candidates for `tokens` with the cursor at `cursor`
    pub fn resolve(&self, tokens: &[String], cursor: usize) -> Completion {
        let ctx = CompletionContext::new(tokens, cursor);

        if is_value_flag(ctx.previous) && ctx.current.is_empty() {
            return self.complete_path("");
        }

        if ctx.previous == "=" {
            return self.complete_path(ctx.current);
        }

        match ctx.index {
            0 => Completion::default(),
            1 => Completion::words(filter_prefix(grammar::top_level(), ctx.current)),
            _ => match ctx.known_subcommand() {
                Some(sub) => {
                    let flags = sub.flags().iter().copied();
                    Completion::words(filter_prefix(flags, ctx.current))
                }
                None => Completion::default(),
            },
        }
    }

    fn complete_path(&self, partial: &str) -> Completion {
        let prefix = effective_prefix(partial, self.home.as_deref());
        let entries = matching_entries(&prefix, &self.cwd);

        if entries.is_empty() {
            return Completion::default();
        }

        Completion::paths(entries.iter().map(|e| escape_spaces(e)).collect())
    }
}

/// Keep the words starting with `prefix`
fn filter_prefix<'a>(words: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<String> {
    words
        .filter(|w| w.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

/// Home directory from `HOME`, falling back to the platform lookup
pub fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
}
