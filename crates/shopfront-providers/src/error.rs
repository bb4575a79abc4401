use shopfront_types::ProductId;
use std::fmt;

/// Result type for shopfront-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the remote catalog
///
/// Transport failures, timeouts, non-2xx statuses and undecodable bodies all
/// collapse into `Fetch`; callers only ever see a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Any remote-call failure
    Fetch { message: String },

    /// Detail lookup for an id the catalog does not know
    NotFound(ProductId),

    /// Base URL could not be used to build endpoint URLs
    InvalidBaseUrl(String),

    /// HTTP client could not be constructed
    Client(String),
}

impl Error {
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::Fetch {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch { message } => f.write_str(message),
            Error::NotFound(_) => f.write_str("Product not found"),
            Error::InvalidBaseUrl(url) => write!(f, "Invalid catalog base URL: {}", url),
            Error::Client(msg) => write!(f, "HTTP client error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
