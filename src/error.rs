//! Top-level error types for the emojicat binary.
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction. Child crate errors are wrapped with their `Exn` frame
//! preserved, so the logged error carries the full tree.

use derive_more::{Display, Error};
use emojicat_extract::error::ErrorKind as ExtractErrorKind;
use emojicat_fetch::error::ErrorKind as FetchErrorKind;
use std::io::Error as IoError;

/// A run-level error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for the binary.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// A chart page could not be fetched.
    #[display("fetch failed: {_0}")]
    Fetch(FetchErrorKind),
    /// A chart page could not be parsed or reconciled.
    #[display("extraction failed: {_0}")]
    Extract(ExtractErrorKind),
    /// Writing an output artifact failed.
    #[display("I/O error: {_0}")]
    Io(IoError),
    /// An output value could not be encoded as JSON.
    #[display("failed to encode JSON: {_0}")]
    Json(#[error(not(source))] String),
    /// A self-test expectation did not hold.
    #[display("self-test assertion failed: {_0}")]
    SelfTest(#[error(not(source))] String),
}

impl ErrorKind {
    /// Wrap a fetch error, keeping its `Exn` frame as a child in the tree.
    #[track_caller]
    pub fn fetch(err: emojicat_fetch::error::Error) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Fetch(inner))
    }

    /// Wrap an extraction error, keeping its `Exn` frame as a child in the tree.
    #[track_caller]
    pub fn extract(err: emojicat_extract::error::Error) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Extract(inner))
    }
}

impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}
