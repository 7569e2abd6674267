//! Diagnostic source locations attached to traits and validation events.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a value was declared. Purely diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File the value came from; empty when unknown.
    pub filename: String,
    /// 1-based line, 0 when unknown.
    pub line: u32,
    /// 1-based column, 0 when unknown.
    pub column: u32,
}

impl SourceLocation {
    pub fn new(filename: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// The "no location" marker.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.filename.is_empty() && self.line == 0 && self.column == 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "N/A")
        } else {
            write!(f, "{} [{}, {}]", self.filename, self.line, self.column)
        }
    }
}
