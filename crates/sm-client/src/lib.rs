//! # sm-client
//!
//! Core HTTP plumbing for the SurveyMonkey v3 API.
//!
//! This crate provides:
//! - Request building (relative paths, query filters, JSON bodies)
//! - The response envelope with success/error classification
//! - A credential-holding client with a pooled transport
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Endpoint catalog                         │
//! │  (sm-rest: surveys, collectors, responses, contacts, ...)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SurveyMonkeyClient                        │
//! │  - Holds api key + access token                             │
//! │  - Rebuilds the transport when the token changes            │
//! │  - create_request / send_request                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SmHttpClient                             │
//! │  - Pooled reqwest client with standard headers              │
//! │  - Wraps every HTTP response in a Response envelope         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use surveymonkey_client::{Query, SurveyMonkeyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), surveymonkey_client::Error> {
//!     let client = SurveyMonkeyClient::new("api-key", "access-token")?;
//!
//!     let response = client
//!         .send(client.get("surveys").query(Query::new().with("per_page", 1)))
//!         .await?;
//!
//!     match response.api_error() {
//!         None => println!("{:?}", response.data()),
//!         Some(err) => eprintln!("{err}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod surveymonkey_client;

pub use client::SmHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{Query, QueryValue, Request, RequestBuilder, RequestMethod, RequestOptions};
pub use response::{ApiError, Response};
pub use surveymonkey_client::SurveyMonkeyClient;

/// Base endpoint of the v3 REST API.
pub const API_BASE_URL: &str = "https://api.surveymonkey.net/v3/";

/// Base endpoint of the OAuth service.
pub const OAUTH_BASE_URL: &str = "https://api.surveymonkey.net/oauth/";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("surveymonkey-api-rs/", env!("CARGO_PKG_VERSION"));
