//! Credential-holding SurveyMonkey client.
//!
//! `SurveyMonkeyClient` owns the API key, the access token and a transport
//! configured for that token. Endpoint crates build requests through it and
//! send them with [`SurveyMonkeyClient::send_request`].
//!
//! ## Security
//!
//! - The API key and access token are redacted in Debug output
//! - The API key is stored for callers but never sent on the wire

use tracing::instrument;
use url::Url;

use crate::client::SmHttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{Request, RequestBuilder, RequestMethod, RequestOptions};
use crate::response::Response;

/// SurveyMonkey API client.
///
/// # Example
///
/// ```rust,ignore
/// use surveymonkey_client::{Query, SurveyMonkeyClient};
///
/// let client = SurveyMonkeyClient::new("api-key", "access-token")?;
///
/// let response = client
///     .send(client.get("surveys").query(Query::new().with("per_page", 1)))
///     .await?;
///
/// if response.is_success() {
///     println!("{}", response.data().unwrap());
/// }
/// ```
#[derive(Clone)]
pub struct SurveyMonkeyClient {
    http: SmHttpClient,
    config: ClientConfig,
    base_url: Url,
    api_key: String,
    access_token: String,
}

impl std::fmt::Debug for SurveyMonkeyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurveyMonkeyClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl SurveyMonkeyClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, access_token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let access_token = access_token.into();
        let base_url = Url::parse(&config.base_url)?;
        let http = SmHttpClient::with_bearer_token(config.clone(), &access_token)?;

        Ok(Self {
            http,
            config,
            base_url,
            api_key: api_key.into(),
            access_token,
        })
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the API key. Outgoing requests are unaffected.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Replace the access token and rebuild the transport so the next
    /// request carries the new `Authorization` header.
    ///
    /// On error the client keeps its previous token and transport.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) -> Result<()> {
        let access_token = access_token.into();
        self.http = SmHttpClient::with_bearer_token(self.config.clone(), &access_token)?;
        self.access_token = access_token;
        Ok(())
    }

    /// The configured transport.
    pub fn http_client(&self) -> &SmHttpClient {
        &self.http
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base endpoint request paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request for `path` relative to the base endpoint.
    pub fn create_request(
        &self,
        method: RequestMethod,
        path: &str,
        options: RequestOptions,
        body: Option<&serde_json::Value>,
    ) -> Result<Request> {
        let mut builder = RequestBuilder::new(method, path).options(options);
        if let Some(body) = body {
            builder = builder.json(body)?;
        }
        builder.build(&self.base_url)
    }

    /// Send a built request.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.url().path()))]
    pub async fn send_request(&self, request: Request) -> Result<Response> {
        self.http.execute(request).await
    }

    /// Resolve a builder against the base endpoint and send it.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build(&self.base_url)?;
        self.send_request(request).await
    }

    /// Start a request builder with the given method.
    pub fn request(&self, method: RequestMethod, path: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, path)
    }

    /// Create a GET request builder.
    pub fn get(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Get, path)
    }

    /// Create a POST request builder.
    pub fn post(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Post, path)
    }

    /// Create a PUT request builder.
    pub fn put(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Put, path)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Patch, path)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Delete, path)
    }

    /// Create a HEAD request builder.
    pub fn head(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Head, path)
    }

    /// Create an OPTIONS request builder.
    pub fn options(&self, path: impl Into<String>) -> RequestBuilder {
        self.request(RequestMethod::Options, path)
    }
}
