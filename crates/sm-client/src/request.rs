//! Request building: method, path, query filters and JSON body.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
            RequestMethod::Head => reqwest::Method::HEAD,
            RequestMethod::Options => reqwest::Method::OPTIONS,
        }
    }

    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Head => "HEAD",
            RequestMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(RequestMethod::Get),
            "POST" => Ok(RequestMethod::Post),
            "PUT" => Ok(RequestMethod::Put),
            "PATCH" => Ok(RequestMethod::Patch),
            "DELETE" => Ok(RequestMethod::Delete),
            "HEAD" => Ok(RequestMethod::Head),
            "OPTIONS" => Ok(RequestMethod::Options),
            other => Err(Error::new(ErrorKind::Other(format!(
                "Unsupported HTTP method: {other:?}"
            )))),
        }
    }
}

/// A single query filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    /// Encoded as indexed keys: `name[0]=a&name[1]=b`.
    ///
    /// Filters the API expects as comma separated text should be joined by
    /// the caller and passed as [`QueryValue::Single`].
    List(Vec<String>),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Single(value.clone())
    }
}

/// Booleans render as `1` / `0`.
impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Single(if value { "1" } else { "0" }.to_string())
    }
}

macro_rules! query_value_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Single(value.to_string())
                }
            }
        )*
    };
}

query_value_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::List(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(values: &[&str]) -> Self {
        QueryValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Ordered query filters (`page`, `per_page`, `sort_by`, ...).
///
/// Insertion order is preserved in the encoded query string. Setting a key
/// that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, QueryValue)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a filter in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((name, value)),
        }
    }

    /// Get a filter value by name.
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Merge another query into this one; its values win on key collisions.
    pub fn extend(&mut self, other: Query) {
        for (name, value) in other.pairs {
            self.set(name, value);
        }
    }

    /// Returns true if no filters are set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterate over filters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encode as an `application/x-www-form-urlencoded` query string.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            match value {
                QueryValue::Single(v) => {
                    serializer.append_pair(name, v);
                }
                QueryValue::List(values) => {
                    for (index, v) in values.iter().enumerate() {
                        serializer.append_pair(&format!("{name}[{index}]"), v);
                    }
                }
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (name, value) in iter {
            query.set(name, value);
        }
        query
    }
}

/// Per-request options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Replaces the query string of the resolved URL when present.
    pub query: Option<Query>,
}

impl RequestOptions {
    /// Options with no query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach query filters.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }
}

impl From<Query> for RequestOptions {
    fn from(query: Query) -> Self {
        RequestOptions::new().with_query(query)
    }
}

/// A fully-formed request, ready for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: RequestMethod,
    url: Url,
    body: Option<String>,
}

impl Request {
    /// The HTTP method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The absolute URL, query included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The encoded query string, if any.
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// The JSON body text. `None` means no body is sent.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Builder for [`Request`].
///
/// The builder never adds headers; those come from the transport the owning
/// client configured.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: RequestMethod,
    path: String,
    options: RequestOptions,
    body: Option<serde_json::Value>,
}

impl RequestBuilder {
    /// Start a request for `path`, relative to the base endpoint.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            options: RequestOptions::default(),
            body: None,
        }
    }

    /// Set the request options.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach query filters.
    pub fn query(mut self, query: Query) -> Self {
        self.options.query = Some(query);
        self
    }

    /// Set the JSON body.
    ///
    /// `null`, `{}` and `[]` leave the request without a body; the upstream
    /// edge rejects an empty object on bodyless verbs.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
        self.body = if is_empty_body(&value) { None } else { Some(value) };
        Ok(self)
    }

    /// Resolve the path against `base` and produce the request.
    ///
    /// Paths with `.` or `..` segments (literal or percent-encoded) are
    /// rejected; they would resolve outside the resource they name.
    pub fn build(self, base: &Url) -> Result<Request> {
        if let Some(segment) = dot_segment(&self.path) {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "path {:?} contains the dot segment {segment:?}",
                self.path
            ))));
        }
        let mut url = base.join(&self.path)?;

        if let Some(query) = &self.options.query {
            let encoded = query.encode();
            if encoded.is_empty() {
                url.set_query(None);
            } else {
                url.set_query(Some(&encoded));
            }
        }

        let body = match self.body {
            Some(value) => Some(
                serde_json::to_string(&value)
                    .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?,
            ),
            None => None,
        };

        Ok(Request {
            method: self.method,
            url,
            body,
        })
    }
}

fn dot_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|segment| {
        matches!(
            segment.to_ascii_lowercase().as_str(),
            "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
        )
    })
}

fn is_empty_body(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        serde_json::Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse(crate::API_BASE_URL).unwrap()
    }

    #[test]
    fn test_path_resolves_under_base() {
        let req = RequestBuilder::new(RequestMethod::Get, "surveys/123/pages")
            .build(&base())
            .unwrap();
        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(
            req.url().as_str(),
            "https://api.surveymonkey.net/v3/surveys/123/pages"
        );
        assert!(req.body().is_none());
        assert!(req.query().is_none());
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        for path in ["surveys/..", "surveys/.", "surveys/%2E%2E/pages", "../oauth/token"] {
            let err = RequestBuilder::new(RequestMethod::Get, path)
                .build(&base())
                .unwrap_err();
            assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)), "{path}");
        }

        let req = RequestBuilder::new(RequestMethod::Get, "surveys/v1.2/pages")
            .query(Query::new().with("next", "../x"))
            .build(&base())
            .unwrap();
        assert_eq!(req.url().path(), "/v3/surveys/v1.2/pages");
    }

    #[test]
    fn test_absent_and_empty_bodies_send_nothing() {
        let absent = RequestBuilder::new(RequestMethod::Post, "contact_lists/1/copy")
            .build(&base())
            .unwrap();
        assert_eq!(absent.body(), None);

        for empty in [json!(null), json!({}), json!([])] {
            let req = RequestBuilder::new(RequestMethod::Post, "surveys")
                .json(&empty)
                .unwrap()
                .build(&base())
                .unwrap();
            assert_eq!(req.body(), None, "{empty} should not produce a body");
        }
    }

    #[test]
    fn test_non_empty_body_is_json_text() {
        let data = json!({"title": "My Survey", "pages": [{"title": "p1"}]});
        let req = RequestBuilder::new(RequestMethod::Post, "surveys")
            .json(&data)
            .unwrap()
            .build(&base())
            .unwrap();
        let sent: serde_json::Value = serde_json::from_str(req.body().unwrap()).unwrap();
        assert_eq!(sent, data);
    }

    #[test]
    fn test_typed_body_serializes() {
        #[derive(Serialize)]
        struct NewList<'a> {
            name: &'a str,
        }

        let req = RequestBuilder::new(RequestMethod::Post, "contact_lists")
            .json(&NewList { name: "Panel" })
            .unwrap()
            .build(&base())
            .unwrap();
        assert_eq!(req.body(), Some(r#"{"name":"Panel"}"#));
    }

    #[test]
    fn test_unserializable_body_is_serialization_error() {
        let mut bad = std::collections::HashMap::new();
        bad.insert((1, 2), "tuple keys are not JSON object keys");

        let err = RequestBuilder::new(RequestMethod::Post, "surveys")
            .json(&bad)
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    }

    #[test]
    fn test_query_replaces_existing_query() {
        let query = Query::new().with("page", 2).with("per_page", 50);
        let req = RequestBuilder::new(RequestMethod::Get, "surveys?include=response_count")
            .query(query)
            .build(&base())
            .unwrap();
        assert_eq!(req.query(), Some("page=2&per_page=50"));
    }

    #[test]
    fn test_empty_query_clears_existing_query() {
        let req = RequestBuilder::new(RequestMethod::Get, "surveys?page=9")
            .query(Query::new())
            .build(&base())
            .unwrap();
        assert_eq!(req.query(), None);
        assert_eq!(req.url().as_str(), "https://api.surveymonkey.net/v3/surveys");
    }

    #[test]
    fn test_query_encoding() {
        let query = Query::new()
            .with("title", "Customer feedback & more")
            .with("include_recipients", true)
            .with("question_ids", vec!["11", "12"].join(","))
            .with("languages", vec!["en", "fr"]);

        assert_eq!(
            query.encode(),
            "title=Customer+feedback+%26+more&include_recipients=1\
             &question_ids=11%2C12&languages%5B0%5D=en&languages%5B1%5D=fr"
        );
    }

    #[test]
    fn test_query_set_replaces_in_place() {
        let mut query: Query = [("page", "1"), ("per_page", "10")].into_iter().collect();
        query.set("page", 3);
        assert_eq!(query.len(), 2);
        assert_eq!(query.encode(), "page=3&per_page=10");
        assert_eq!(query.get("page"), Some(&QueryValue::Single("3".into())));

        let mut merged = Query::new().with("sort_by", "title");
        merged.extend(Query::new().with("sort_by", "date_modified").with("page", 1));
        assert_eq!(merged.encode(), "sort_by=date_modified&page=1");
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("get".parse::<RequestMethod>().unwrap(), RequestMethod::Get);
        assert_eq!("OPTIONS".parse::<RequestMethod>().unwrap(), RequestMethod::Options);
        assert!("".parse::<RequestMethod>().is_err());
        assert!("TRACE".parse::<RequestMethod>().is_err());
        assert_eq!(RequestMethod::Patch.to_string(), "PATCH");
        assert_eq!(RequestMethod::Head.to_reqwest(), reqwest::Method::HEAD);
    }
}
