//! Error types.

use thiserror::Error;

/// Failure talking to the NPC backend.
///
/// Callers never branch on the variant; every failure takes the same
/// "request failed" path at its call site. The variants exist for logging.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or a body that could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid backend URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {0}")]
    CannotBeABase(String),

    /// No answer within the front end's own deadline.
    #[error("no reply within {0:?}")]
    Timeout(std::time::Duration),

    /// Backend answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `error` field of the body when present, raw body otherwise.
        message: String,
    },
}

/// Result type alias for backend calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A request path that does not map to a page.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// No page is addressed by this path.
    #[error("no page matches {0}")]
    NoMatch(String),

    /// The character segment is not valid percent-encoded UTF-8.
    #[error("invalid character id encoding in {0}")]
    InvalidEncoding(String),
}
