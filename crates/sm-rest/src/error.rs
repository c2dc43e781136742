//! Error types for sm-rest.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Returns true if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        self.source
            .as_ref()
            .and_then(|s| s.downcast_ref::<surveymonkey_client::Error>())
            .is_some_and(surveymonkey_client::Error::is_transport)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

impl From<surveymonkey_client::Error> for Error {
    fn from(err: surveymonkey_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<surveymonkey_auth::Error> for Error {
    fn from(err: surveymonkey_auth::Error) -> Self {
        Error {
            kind: ErrorKind::Auth(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_classification() {
        let err: Error =
            surveymonkey_client::Error::new(surveymonkey_client::ErrorKind::Timeout).into();
        assert!(matches!(err.kind, ErrorKind::Client(_)));
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Client error: Request timeout");

        let err: Error = surveymonkey_client::Error::new(surveymonkey_client::ErrorKind::Json(
            "eof".into(),
        ))
        .into();
        assert!(!err.is_transport());
    }

    #[test]
    fn test_auth_error_wrapping() {
        let err: Error =
            surveymonkey_auth::Error::new(surveymonkey_auth::ErrorKind::EnvVar("SM_ACCESS_TOKEN".into()))
                .into();
        assert!(matches!(err.kind, ErrorKind::Auth(_)));
        assert!(err.to_string().contains("SM_ACCESS_TOKEN"));
    }
}
