//! OAuth 2.0 authorization-code flow.
//!
//! The user is sent to [`Authenticator::authorize_url`], SurveyMonkey
//! redirects back with a short-lived `code`, and
//! [`Authenticator::get_token`] exchanges it for a long-lived access token.
//! There are no refresh tokens; a new token needs a new authorization.

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use surveymonkey_client::ClientConfig;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::credentials::ApiCredentials;
use crate::error::{Error, ErrorKind, Result};

const JSON_CONTENT_TYPE: &str = "application/json";

/// OAuth client for a registered SurveyMonkey app.
///
/// The client secret is redacted in Debug output. The authenticator keeps no
/// token state; persist the returned token and hand it to the API client.
#[derive(Clone)]
pub struct Authenticator {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    oauth_base: Url,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("oauth_base", &self.oauth_base.as_str())
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Create an authenticator against the production OAuth service.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(client_id, client_secret, redirect_uri, &ClientConfig::default())
    }

    /// Create an authenticator whose HTTP client uses the given timeouts and
    /// user agent.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            oauth_base: Url::parse(surveymonkey_client::OAUTH_BASE_URL)?,
            http_client,
        })
    }

    /// Load app settings from environment variables.
    ///
    /// Required:
    /// - `SM_CLIENT_ID` or `SURVEYMONKEY_CLIENT_ID`
    /// - `SM_CLIENT_SECRET` or `SURVEYMONKEY_CLIENT_SECRET`
    /// - `SM_REDIRECT_URI` or `SURVEYMONKEY_REDIRECT_URI`
    pub fn from_env() -> Result<Self> {
        let var = |primary: &str, fallback: &str| {
            std::env::var(primary)
                .or_else(|_| std::env::var(fallback))
                .map_err(|_| Error::new(ErrorKind::EnvVar(primary.to_string())))
        };

        Self::new(
            var("SM_CLIENT_ID", "SURVEYMONKEY_CLIENT_ID")?,
            var("SM_CLIENT_SECRET", "SURVEYMONKEY_CLIENT_SECRET")?,
            var("SM_REDIRECT_URI", "SURVEYMONKEY_REDIRECT_URI")?,
        )
    }

    /// Point the authenticator at a different OAuth base (mock servers).
    pub fn with_oauth_base(mut self, oauth_base: &str) -> Result<Self> {
        let mut base = oauth_base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        self.oauth_base = Url::parse(&base)?;
        Ok(self)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.client_id = client_id.into();
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) {
        self.client_secret = client_secret.into();
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn set_redirect_uri(&mut self, redirect_uri: impl Into<String>) {
        self.redirect_uri = redirect_uri.into();
    }

    /// Base URL of the OAuth service.
    pub fn oauth_base(&self) -> &Url {
        &self.oauth_base
    }

    /// The HTTP client used for the token exchange.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// URL to send the user to for authorization.
    pub fn authorize_url(&self) -> Result<String> {
        let mut url = self.oauth_base.join("authorize")?;
        url.query_pairs_mut()
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", "code");
        Ok(url.into())
    }

    /// Exchange an authorization code for an access token.
    ///
    /// The code parameter is not logged to prevent credential exposure.
    #[instrument(skip(self, code), fields(client_id = %self.client_id))]
    pub async fn get_token(&self, code: &str) -> Result<TokenResponse> {
        let params = [
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
        ];
        let body = serde_urlencoded::to_string(params)?;

        let response = self
            .http_client
            .post(self.oauth_base.join("token")?)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Token exchange rejected");
            if let Some(err) = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| oauth_error(&v, Some(status.as_u16())))
            {
                return Err(err);
            }
            return Err(Error::new(ErrorKind::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }));
        }

        if !content_type.to_ascii_lowercase().contains(JSON_CONTENT_TYPE) {
            return Err(Error::new(ErrorKind::UnexpectedContentType {
                expected: JSON_CONTENT_TYPE.to_string(),
                actual: if content_type.is_empty() {
                    "no content type".to_string()
                } else {
                    content_type
                },
            }));
        }

        let value: Value = serde_json::from_str(&text)?;
        if let Some(err) = oauth_error(&value, Some(status.as_u16())) {
            return Err(err);
        }

        let token: TokenResponse = serde_json::from_value(value)?;
        debug!(token_type = ?token.token_type, "Access token issued");
        Ok(token)
    }
}

/// Token response from the OAuth service.
///
/// The access token is redacted in Debug output. Only `access_token` is
/// required; metadata of an unexpected JSON type reads as `None` so an
/// issued token is never discarded.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Token type (usually "bearer").
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_type: Option<String>,
    /// API host to use with this token.
    #[serde(default, deserialize_with = "lenient_string")]
    pub access_url: Option<String>,
    /// Lifetime in seconds, when the service reports one.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub expires_in: Option<u64>,
    /// Any other metadata the service returned.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("access_url", &self.access_url)
            .field("expires_in", &self.expires_in)
            .field("extra", &self.extra.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TokenResponse {
    /// Convert to ApiCredentials.
    pub fn to_credentials(&self, api_key: impl Into<String>) -> ApiCredentials {
        ApiCredentials::new(api_key, &self.access_token)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts `3600`, `3600.0` and `"3600"`.
fn lenient_seconds<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Extract an OAuth error from a token endpoint body.
///
/// Handles both `{"error": "code", "error_description": "..."}` and the v3
/// style `{"error": {"name": ..., "message": ...}}`.
fn oauth_error(body: &Value, status: Option<u16>) -> Option<Error> {
    let (error, description) = match body.get("error")? {
        Value::Null => return None,
        Value::String(code) => (
            code.clone(),
            body.get("error_description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        ),
        Value::Object(obj) => (
            obj.get("name")
                .or_else(|| obj.get("id"))
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .unwrap_or_else(|| "error".to_string()),
            obj.get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        ),
        other => (other.to_string(), String::new()),
    };

    Some(Error::new(ErrorKind::OAuth {
        error,
        description,
        status,
    }))
}
