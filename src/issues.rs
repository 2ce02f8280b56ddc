//! Problems found while documenting a source tree.

use std::fmt;

/// A source file that could not be read or parsed.
///
/// The run continues without the file; the CLI reports it as a warning and
/// exits with a failure status.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParseErrorIssue {
    /// Path relative to the source root.
    pub file_path: String,
    pub error: String,
}

impl fmt::Display for ParseErrorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_path, self.error)
    }
}
