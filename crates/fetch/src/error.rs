//! Fetch Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction, matching the conventions of the other crates in this
//! workspace.

use derive_more::{Display, Error};

/// A fetch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Retryable kinds describe a single failed attempt; [`ErrorKind::Exhausted`]
/// is what the caller sees once the retry ceiling is spent.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport-level failure (DNS, connect, TLS, mid-body disconnect).
    #[display("network error: {_0}")]
    Network(#[error(not(source))] String),
    /// The per-attempt timeout elapsed; the in-flight request was aborted.
    #[display("request timed out")]
    Timeout,
    /// The server answered with a non-success status.
    #[display("unexpected HTTP status {code} from {url}")]
    Status {
        code: u16,
        url: String,
    },
    /// Every configured attempt failed.
    #[display("gave up fetching {url} after {attempts} attempts")]
    Exhausted {
        url: String,
        attempts: u32,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            // Server-side hiccups and throttling are worth another attempt;
            // anything else (404, 403, redirect loops) won't change.
            Self::Status { code, .. } => *code >= 500 || *code == 429,
            Self::Exhausted { .. } => false,
        }
    }
}

impl From<reqwest::Error> for ErrorKind {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}
