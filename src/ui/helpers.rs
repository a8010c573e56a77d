use std::fmt::Display;

use anyhow::Error;
use crossterm::style::{style, Stylize};

/// Extract the most relevant message from a chained error: the outer context
/// followed by the root cause, when they differ.
pub(crate) fn surface_error(err: &Error) -> String {
    match err.chain().last() {
        Some(cause) if err.chain().count() > 1 => format!("{err}: {cause}"),
        _ => err.to_string(),
    }
}

/// Console styling. A plain palette writes text untouched, so piped or
/// captured output carries no escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    enabled: bool,
}

impl Palette {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn plain() -> Self {
        Self::new(false)
    }

    /// Bold cyan section heading.
    pub(crate) fn heading<D: Display>(self, text: D) -> String {
        if self.enabled {
            style(text).bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Red message for failed operations.
    pub(crate) fn failure<D: Display>(self, text: D) -> String {
        if self.enabled {
            style(text).red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Yellow message for accepted input that deserves a second look.
    pub(crate) fn caution<D: Display>(self, text: D) -> String {
        if self.enabled {
            style(text).yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
