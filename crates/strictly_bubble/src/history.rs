//! Append-only step log.

use serde::{Deserialize, Serialize};

/// Ordered log of textual events for one session.
///
/// Lines can only be appended; the log is never reordered or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    lines: Vec<String>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Returns all lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the most recent line.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Joins the log into one multi-line block.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
