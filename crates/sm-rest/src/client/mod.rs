//! SurveyMonkey REST API client.
//!
//! This client wraps `SurveyMonkeyClient` from `sm-client` and provides one
//! method per v3 endpoint. Each resource group lives in its own module as an
//! `impl` block on [`SurveyMonkeyRestClient`].
//!
//! Every method performs exactly one request and returns the response
//! envelope. API-level failures (4xx/5xx) come back as envelopes with
//! `is_error() == true`; only transport and encoding failures are `Err`.

use std::borrow::Cow;

use serde::Serialize;
use surveymonkey_auth::ApiCredentials;
use surveymonkey_client::{
    ClientConfig, Query, RequestBuilder, RequestMethod, Response, SurveyMonkeyClient,
};

use crate::error::{Error, ErrorKind, Result};

mod benchmarks;
mod collectors;
mod common;
mod contacts;
mod errors;
mod organizations;
mod question_bank;
mod responses;
mod rollups;
mod survey_folders;
mod surveys;
mod translations;
mod users;
mod webhooks;

/// SurveyMonkey v3 REST API client.
///
/// Endpoint groups:
/// - Users and groups
/// - Surveys, pages, questions, folders, translations
/// - Collectors, messages, recipients
/// - Responses, rollups and trends
/// - Contacts, contact lists, contact fields
/// - Webhooks, benchmarks, errors, organizations
///
/// # Example
///
/// ```rust,ignore
/// use surveymonkey_rest::{Query, SurveyMonkeyRestClient};
///
/// let client = SurveyMonkeyRestClient::new("api-key", "access-token")?;
///
/// let surveys = client.get_surveys(Query::new().with("per_page", 1)).await?;
/// assert!(surveys.is_success());
///
/// let list = client.create_contact_list(&json!({"name": "Panel"})).await?;
/// let id = list.data().unwrap()["id"].as_str().unwrap().to_string();
/// client.delete_contact_list(&id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SurveyMonkeyRestClient {
    client: SurveyMonkeyClient,
}

impl SurveyMonkeyRestClient {
    /// Create a new REST client with the given API key and access token.
    pub fn new(api_key: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let client = SurveyMonkeyClient::new(api_key, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SurveyMonkeyClient::with_config(api_key, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from loaded credentials.
    pub fn from_credentials(credentials: &ApiCredentials) -> Result<Self> {
        Ok(Self {
            client: credentials.client()?,
        })
    }

    /// Create a REST client from an existing SurveyMonkeyClient.
    pub fn from_client(client: SurveyMonkeyClient) -> Self {
        Self { client }
    }

    /// Get the underlying SurveyMonkeyClient.
    pub fn inner(&self) -> &SurveyMonkeyClient {
        &self.client
    }

    pub fn api_key(&self) -> &str {
        self.client.api_key()
    }

    /// Replace the stored API key. Outgoing requests are unaffected.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.client.set_api_key(api_key);
    }

    pub fn access_token(&self) -> &str {
        self.client.access_token()
    }

    /// Replace the access token used by all subsequent requests.
    pub fn set_access_token(&mut self, access_token: impl Into<String>) -> Result<()> {
        self.client.set_access_token(access_token).map_err(Into::into)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        self.client.send(builder).await.map_err(Into::into)
    }

    /// GET a single resource.
    async fn fetch(&self, path: String) -> Result<Response> {
        self.execute(self.client.get(path)).await
    }

    /// GET a collection with filters.
    async fn list(&self, path: String, filters: Query) -> Result<Response> {
        self.execute(self.client.get(path).query(filters)).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: RequestMethod,
        path: String,
        body: &B,
    ) -> Result<Response> {
        let builder = self.client.request(method, path).json(body)?;
        self.execute(builder).await
    }

    async fn remove(&self, path: String) -> Result<Response> {
        self.execute(self.client.delete(path)).await
    }
}

/// Percent-encode an identifier for use as a path segment.
///
/// `.` and `..` pass through unchanged; the request builder rejects them
/// before anything is sent.
pub(crate) fn seg(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

/// Serialize `data` to a JSON object and set `key` on it.
pub(crate) fn merge_field<B: Serialize + ?Sized>(
    data: &B,
    key: &str,
    value: &str,
) -> Result<serde_json::Value> {
    let mut value_map = match serde_json::to_value(data) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(serde_json::Value::Null) => serde_json::Map::new(),
        Ok(other) => {
            return Err(Error::new(ErrorKind::InvalidInput(format!(
                "expected a JSON object body, got {}",
                json_type(&other)
            ))))
        }
        Err(e) => {
            return Err(Error {
                kind: ErrorKind::InvalidInput(e.to_string()),
                source: Some(Box::new(e)),
            })
        }
    };
    value_map.insert(key.to_string(), serde_json::Value::String(value.to_string()));
    Ok(serde_json::Value::Object(value_map))
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = SurveyMonkeyRestClient::new("FOO", "BAR").unwrap();
        assert_eq!(client.api_key(), "FOO");
        assert_eq!(client.access_token(), "BAR");
        assert_eq!(
            client.inner().base_url().as_str(),
            "https://api.surveymonkey.net/v3/"
        );
    }

    #[test]
    fn test_credential_setters() {
        let mut client = SurveyMonkeyRestClient::new("FOO", "BAR").unwrap();
        client.set_api_key("BAR");
        client.set_access_token("FOO").unwrap();
        assert_eq!(client.api_key(), "BAR");
        assert_eq!(client.access_token(), "FOO");
    }

    #[test]
    fn test_from_credentials() {
        let creds = ApiCredentials::new("key", "token");
        let client = SurveyMonkeyRestClient::from_credentials(&creds).unwrap();
        assert_eq!(client.access_token(), "token");
    }

    #[test]
    fn test_seg_encodes_reserved_characters() {
        assert_eq!(seg("12345"), "12345");
        assert_eq!(seg("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(seg("zh-hans"), "zh-hans");
        assert_eq!(seg("%2e%2e"), "%252e%252e");
    }

    #[tokio::test]
    async fn test_dot_segment_ids_are_rejected() {
        use wiremock::matchers::any;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = test_support::mock_client(&mock_server);

        let err = client.get_survey("..").await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Client(_)));
        assert!(err.to_string().contains("dot segment"));
        assert!(!err.is_transport());

        assert!(client.get_survey_page("1", ".").await.is_err());
        assert!(client.delete_contact_list("..").await.is_err());
    }

    #[test]
    fn test_merge_field() {
        let merged = merge_field(&json!({"title": "Copy"}), "from_survey_id", "99").unwrap();
        assert_eq!(merged, json!({"title": "Copy", "from_survey_id": "99"}));

        let merged = merge_field(&json!({"from_template_id": "old"}), "from_template_id", "7").unwrap();
        assert_eq!(merged, json!({"from_template_id": "7"}));

        let merged = merge_field(&json!(null), "from_template_id", "7").unwrap();
        assert_eq!(merged, json!({"from_template_id": "7"}));

        let err = merge_field(&json!([1, 2]), "from_survey_id", "1").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidInput(_)));
        assert!(err.to_string().contains("an array"));
    }
}
