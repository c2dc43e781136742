//! HTTP transport for the SurveyMonkey API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::Request;
use crate::response::Response;

/// Pooled HTTP transport with the standard SurveyMonkey headers baked in.
///
/// Every request carries `User-Agent`, `Content-Type: application/json` and
/// `Authorization: Bearer <token>`. The headers are fixed at construction;
/// changing the token means building a new transport.
#[derive(Debug, Clone)]
pub struct SmHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SmHttpClient {
    /// Create a transport that sends `Authorization: Bearer {access_token}`.
    pub fn with_bearer_token(config: ClientConfig, access_token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut authorization = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying reqwest client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.inner
    }

    /// Send a request and wrap whatever comes back in an envelope.
    ///
    /// HTTP error statuses are returned as envelopes, not errors.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method().to_reqwest(), request.url().clone());

        if let Some(body) = request.body() {
            req = req.body(body.to_owned());
        }

        if self.config.enable_tracing {
            debug!(
                method = %request.method(),
                url = %request.url(),
                has_body = request.body().is_some(),
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            let content_length = response.content_length();

            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        Response::from_reqwest(request, response).await
    }
}
