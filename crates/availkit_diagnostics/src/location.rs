//! Host-supplied source locations of analyzed use sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A resolved source position. Line and column are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// The source file path.
    pub path: PathBuf,
    /// The line number.
    pub line: u32,
    /// The column number.
    pub column: u32,
}

impl Location {
    /// Creates a location.
    pub fn new(path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}
