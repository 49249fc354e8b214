//! Extraction Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction, matching the conventions of the other crates in this
//! workspace.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field was found but could not be parsed. A non-hex codepoint token
    /// falls under this: it means the chart's schema changed upstream and the
    /// whole run must stop, never a silent row skip.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// Details about the parsing failure.
        value: String,
    },
    /// A count label required for reconciliation never appeared in the table.
    #[display("missing required count label: {_0}")]
    MissingCount(#[error(not(source))] &'static str),
    /// The reported aggregate counts do not reconcile.
    #[display("count totals do not reconcile: {_0}")]
    Integrity(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Parsing the same HTML again gives the same answer.
        false
    }
}
