//! The response envelope.
//!
//! Every HTTP response that reaches the client, whatever its status, is
//! wrapped in a [`Response`]. The body is decoded once at construction when
//! the server labels it as JSON; callers then ask the envelope whether the
//! call succeeded and read the payload or the upstream error object.

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};
use crate::request::Request;

/// A request paired with the response it produced.
#[derive(Debug, Clone)]
pub struct Response {
    request: Request,
    status: u16,
    headers: HeaderMap,
    body: Bytes,
    data: Option<Value>,
}

impl Response {
    /// Wrap raw response parts, decoding the body when it is labelled JSON.
    ///
    /// Returns a JSON error if the body is labelled JSON but does not parse.
    pub fn new(request: Request, status: u16, headers: HeaderMap, body: Bytes) -> Result<Self> {
        let data = if is_json_content_type(&headers) {
            Some(decode_json(&body)?)
        } else {
            None
        };

        Ok(Self {
            request,
            status,
            headers,
            body,
            data,
        })
    }

    /// Read a reqwest response to the end and wrap it.
    pub async fn from_reqwest(request: Request, response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Self::new(request, status, headers, body)
    }

    /// Decoded body, or `None` when the response was not JSON.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Consume the envelope, keeping only the decoded body.
    pub fn into_data(self) -> Option<Value> {
        self.data
    }

    /// True when the body decoded to a non-empty value without an `error`.
    pub fn is_success(&self) -> bool {
        match &self.data {
            None => false,
            Some(data) if !is_truthy(data) => false,
            Some(data) => !data.get("error").is_some_and(|e| !e.is_null()),
        }
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// The upstream `error` object, if the call failed and the body has one.
    pub fn error(&self) -> Option<&Value> {
        if self.is_success() {
            return None;
        }
        self.data
            .as_ref()
            .and_then(|d| d.get("error"))
            .filter(|e| !e.is_null())
    }

    /// Typed view of [`error`](Self::error).
    pub fn api_error(&self) -> Option<ApiError> {
        self.error().and_then(|e| ApiError::deserialize(e).ok())
    }

    /// Deserialize the decoded body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let data = self.data.as_ref().ok_or_else(|| {
            Error::new(ErrorKind::Json(format!(
                "response is not JSON (content-type: {})",
                self.content_type().unwrap_or("none")
            )))
        })?;
        T::deserialize(data).map_err(Into::into)
    }

    /// The request that produced this response.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, if present and valid text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Raw body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The error object SurveyMonkey returns under the `error` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Link to the documentation for this error.
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub http_status_code: Option<u16>,
    /// Any other fields the API included.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("Error");
        match (&self.id, &self.message) {
            (Some(id), Some(message)) => write!(f, "{name} ({id}): {message}"),
            (None, Some(message)) => write!(f, "{name}: {message}"),
            (Some(id), None) => write!(f, "{name} ({id})"),
            (None, None) => f.write_str(name),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Checks the first Content-Type header for `application/json`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.to_ascii_lowercase().contains("application/json"))
}

fn decode_json(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, "Response labelled JSON failed to decode");
        e.into()
    })
}

/// Loose truthiness: null, false, zero, "", "0" and empty containers are
/// all treated as "no data".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
