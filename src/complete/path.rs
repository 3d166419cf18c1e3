//! Filesystem path completion
//!
//! Paths typed after `--flag=` are completed by listing directories and
//! matching entry names against the typed prefix.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Names of the entries of one directory
///
/// Each call to [`EntryNames::iter`] reads the directory again, so the
/// sequence can be restarted. Unreadable directories yield nothing.
#[derive(Debug, Clone)]
pub struct EntryNames {
    dir: PathBuf,
}

impl EntryNames {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        EntryNames { dir: dir.into() }
    }

    /// Lazily iterate over the entry names
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        fs::read_dir(&self.dir)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
    }
}

/// Escape spaces for insertion into a shell command line
pub fn escape_spaces(s: &str) -> String {
    s.replace(' ', "\\ ")
}

/// Undo [`escape_spaces`]
pub fn unescape_spaces(s: &str) -> String {
    s.replace("\\ ", " ")
}

/// Replace the `~` of a leading `~/` with the home directory
pub fn expand_tilde(partial: &str, home: Option<&Path>) -> String {
    match (partial.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => {
            let home = home.to_string_lossy();
            format!("{}/{}", home.trim_end_matches('/'), rest)
        }
        _ => partial.to_string(),
    }
}

/// The prefix actually matched against the filesystem for a partial token
pub fn effective_prefix(partial: &str, home: Option<&Path>) -> String {
    expand_tilde(&unescape_spaces(partial), home)
}

/// All entries whose path starts with `prefix`, sorted and unescaped
///
/// The directory part of `prefix` picks the directory to list (relative
/// to `cwd`); it is kept verbatim in front of every candidate. Hidden
/// entries only match when the name part itself starts with a dot.
pub fn matching_entries(prefix: &str, cwd: &Path) -> Vec<String> {
    let (dir_part, name_part) = match prefix.rfind('/') {
        Some(pos) => prefix.split_at(pos + 1),
        None => ("", prefix),
    };

    let dir = if dir_part.is_empty() {
        cwd.to_path_buf()
    } else {
        cwd.join(dir_part)
    };
    let show_hidden = name_part.starts_with('.');

    EntryNames::new(dir)
        .iter()
        .filter(|name| name.starts_with(name_part))
        .filter(|name| show_hidden || !name.starts_with('.'))
        .map(|name| format!("{}{}", dir_part, name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
