//! Completion context
//!
//! A read-only view of the command line around the cursor.

use crate::complete::grammar::Subcommand;

/// The tokens surrounding the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext<'a> {
    /// Token under the cursor (empty when the cursor is past the last token)
    pub current: &'a str,

    /// Token before the cursor (empty at index 0)
    pub previous: &'a str,

    /// Cursor index into the token sequence
    pub index: usize,

    /// Token at index 1, if any
    pub subcommand: Option<&'a str>,
}

impl<'a> CompletionContext<'a> {
    /// Build the context for `tokens` with the cursor at `index`
    pub fn new(tokens: &'a [String], index: usize) -> Self {
        let token = move |i: usize| tokens.get(i).map(String::as_str);

        CompletionContext {
            current: token(index).unwrap_or(""),
            previous: index.checked_sub(1).and_then(token).unwrap_or(""),
            index,
            subcommand: token(1),
        }
    }

    /// The subcommand, when it is one the grammar knows
    pub fn known_subcommand(&self) -> Option<Subcommand> {
        self.subcommand.and_then(Subcommand::parse)
    }
}
