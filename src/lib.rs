//! # surveymonkey-api
//!
//! A SurveyMonkey v3 API client library for Rust.
//!
//! ## Security
//!
//! - Access tokens, API keys and client secrets are redacted in Debug output
//! - Tracing spans skip request bodies and authorization codes
//! - Error messages sanitize credential data
//!
//! ## Crates
//!
//! - **surveymonkey-client** - Request building, the response envelope, the pooled HTTP transport
//! - **surveymonkey-auth** - OAuth 2.0 authorization-code flow and credentials
//! - **surveymonkey-rest** - One method per v3 endpoint: surveys, collectors, responses, contacts, ...
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use surveymonkey_api::{ApiCredentials, Query, SurveyMonkeyRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SM_ACCESS_TOKEN (and optionally SM_API_KEY)
//!     let creds = ApiCredentials::from_env()?;
//!     let client = SurveyMonkeyRestClient::from_credentials(&creds)?;
//!
//!     let surveys = client
//!         .get_surveys(Query::new().with("per_page", 10))
//!         .await?;
//!
//!     if let Some(err) = surveys.api_error() {
//!         eprintln!("{err}");
//!     } else if let Some(data) = surveys.data() {
//!         for survey in data["data"].as_array().into_iter().flatten() {
//!             println!("{}", survey["title"]);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use surveymonkey_auth as auth;
#[cfg(feature = "client")]
pub use surveymonkey_client as client;
#[cfg(feature = "rest")]
pub use surveymonkey_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use surveymonkey_auth::{ApiCredentials, Authenticator, TokenResponse};
#[cfg(feature = "client")]
pub use surveymonkey_client::{
    ApiError, ClientConfig, Query, QueryValue, RequestMethod, RequestOptions, Response,
    SurveyMonkeyClient,
};
#[cfg(feature = "rest")]
pub use surveymonkey_rest::SurveyMonkeyRestClient;
