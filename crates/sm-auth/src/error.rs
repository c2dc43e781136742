//! Error types for sm-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for sm-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sm-auth operations.
///
/// Error messages are sanitized to prevent accidental credential exposure.
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

    /// The HTTP status of a rejected token exchange, if known.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Status { status, .. } => Some(*status),
            ErrorKind::OAuth { status, .. } => *status,
            _ => None,
        }
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error reported by SurveyMonkey.
    #[error("OAuth error: {error} - {description}")]
    OAuth {
        error: String,
        description: String,
        status: Option<u16>,
    },

    /// Non-2xx status without a recognizable OAuth error body.
    #[error("HTTP error: {status} {message}")]
    Status { status: u16, message: String },

    /// Transport failure during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Token endpoint answered with something other than JSON.
    #[error("Response expected to be a JSON response. Expected {expected}, received {actual}")]
    UnexpectedContentType { expected: String, actual: String },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// OAuth base URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the underlying API client.
    #[error("Client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Never echo form parameters from the token request.
        let message = err.to_string();
        let sanitized = if message.contains("client_secret") || message.contains("code=") {
            "HTTP request failed (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Http(sanitized), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

impl From<surveymonkey_client::Error> for Error {
    fn from(err: surveymonkey_client::Error) -> Self {
        let message = err.to_string();
        let sanitized = if message.contains("Bearer") {
            "Client error (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Client(sanitized), err)
    }
}
