//! Error types for sm-client.
//!
//! HTTP error statuses are not errors here: any response that arrives is
//! wrapped in a [`Response`](crate::Response) envelope. `Error` covers the
//! failures that leave no response to inspect.

/// Result type alias for sm-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sm-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Timeout | ErrorKind::Connection(_) | ErrorKind::Http(_)
        )
    }

    /// Returns true if a response declared as JSON could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Json(_))
    }

    /// Returns true if this is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The exchange broke off after connecting: request write, body read,
    /// or a redirect loop.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (DNS, refused, TLS).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body declared as JSON failed to decode.
    #[error("JSON error: {0}")]
    Json(String),

    /// Request body failed to encode.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Path or base URL could not be resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value (usually the access token) is not valid HTTP.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_request() || err.is_body() || err.is_redirect() {
            ErrorKind::Http(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        // The offending value is a credential; keep it out of the message.
        Error::with_source(
            ErrorKind::InvalidHeader("value contains characters not allowed in a header".to_string()),
            err,
        )
    }
}
