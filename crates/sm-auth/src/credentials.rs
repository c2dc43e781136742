//! API credentials.
//!
//! Credential types implement custom Debug to redact sensitive data.

use surveymonkey_client::{ClientConfig, SurveyMonkeyClient};

use crate::error::{Error, ErrorKind, Result};

/// API key plus bearer access token for the v3 API.
///
/// The access token and API key are redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    api_key: String,
    access_token: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl ApiCredentials {
    /// Create new credentials with the given values.
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            access_token: access_token.into(),
        }
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Set a new access token (e.g., after a fresh authorization).
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
    }

    /// Returns true if an access token is present.
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `SM_ACCESS_TOKEN` or `SURVEYMONKEY_ACCESS_TOKEN`
    ///
    /// Optional:
    /// - `SM_API_KEY` or `SURVEYMONKEY_API_KEY` (default: empty)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_token = lookup("SM_ACCESS_TOKEN")
            .or_else(|| lookup("SURVEYMONKEY_ACCESS_TOKEN"))
            .ok_or_else(|| Error::new(ErrorKind::EnvVar("SM_ACCESS_TOKEN".to_string())))?;

        let api_key = lookup("SM_API_KEY")
            .or_else(|| lookup("SURVEYMONKEY_API_KEY"))
            .unwrap_or_default();

        Ok(Self::new(api_key, access_token))
    }

    /// Build an API client for these credentials.
    pub fn client(&self) -> Result<SurveyMonkeyClient> {
        self.client_with_config(ClientConfig::default())
    }

    /// Build an API client for these credentials with custom configuration.
    pub fn client_with_config(&self, config: ClientConfig) -> Result<SurveyMonkeyClient> {
        SurveyMonkeyClient::with_config(&self.api_key, &self.access_token, config)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_credentials_new() {
        let creds = ApiCredentials::new("FOO", "BAR");
        assert_eq!(creds.api_key(), "FOO");
        assert_eq!(creds.access_token(), "BAR");
        assert!(creds.is_valid());
        assert!(!ApiCredentials::new("FOO", "").is_valid());
    }

    #[test]
    fn test_from_lookup_primary_names() {
        let creds =
            ApiCredentials::from_lookup(lookup(&[("SM_API_KEY", "key"), ("SM_ACCESS_TOKEN", "tok")]))
                .unwrap();
        assert_eq!(creds, ApiCredentials::new("key", "tok"));
    }

    #[test]
    fn test_from_lookup_fallback_names() {
        let creds = ApiCredentials::from_lookup(lookup(&[
            ("SURVEYMONKEY_API_KEY", "key2"),
            ("SURVEYMONKEY_ACCESS_TOKEN", "tok2"),
        ]))
        .unwrap();
        assert_eq!(creds.api_key(), "key2");
        assert_eq!(creds.access_token(), "tok2");
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = ApiCredentials::from_lookup(lookup(&[("SM_API_KEY", "key")])).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::EnvVar(ref name) if name == "SM_ACCESS_TOKEN"));

        let creds = ApiCredentials::from_lookup(lookup(&[("SM_ACCESS_TOKEN", "tok")])).unwrap();
        assert_eq!(creds.api_key(), "");
    }

    #[test]
    fn test_credentials_debug_redacts_tokens() {
        let creds = ApiCredentials::new("super_secret_key_12345", "super_secret_token_67890");
        let debug_output = format!("{:?}", creds);

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_key_12345"));
        assert!(!debug_output.contains("super_secret_token_67890"));
    }

    #[test]
    fn test_client_from_credentials() {
        let client = ApiCredentials::new("FOO", "BAR").client().unwrap();
        assert_eq!(client.api_key(), "FOO");
        assert_eq!(client.access_token(), "BAR");
    }
}
