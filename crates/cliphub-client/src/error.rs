use std::fmt;

/// Result type for hub client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can surface from a hub API call
#[derive(Debug)]
pub enum Error {
    /// Request never produced a usable response (DNS, refused, reset, ...)
    Network(String),

    /// Response body was not the expected JSON envelope
    InvalidResponse,

    /// Backend answered with an error envelope; carries its message
    Api(String),

    /// The configured base URL cannot address the clip collection
    BaseUrl(String),
}

impl Error {
    /// Human-readable message for hints and toasts.
    ///
    /// Backend-supplied messages are shown verbatim; everything else gets a
    /// stable fallback so the UI never renders an empty error line.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::InvalidResponse => write!(f, "Invalid JSON from server."),
            Error::Api(msg) => write!(f, "{}", msg),
            Error::BaseUrl(msg) => write!(f, "Invalid base URL: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}
