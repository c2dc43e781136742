//! # sm-rest
//!
//! SurveyMonkey v3 REST API endpoints, one async method per endpoint.
//!
//! ## Features
//!
//! - **Users and groups** - Current user, shared resources, groups and members
//! - **Surveys** - Surveys, pages, questions, folders, translations, templates
//! - **Collectors** - Collectors, messages, recipients and stats
//! - **Responses** - Survey and collector responses, bulk and detailed views
//! - **Rollups and trends** - Aggregated answers per survey, page or question
//! - **Contacts** - Contact lists, contacts and contact fields
//! - **Webhooks, benchmarks, errors, organizations**
//!
//! Every method returns the raw [`Response`] envelope. Check
//! [`Response::is_success`] or [`Response::api_error`] for API-level
//! failures; `Err` is reserved for transport and encoding problems.
//!
//! ## Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use surveymonkey_rest::{Query, SurveyMonkeyRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), surveymonkey_rest::Error> {
//!     let client = SurveyMonkeyRestClient::new("api-key", "access-token")?;
//!
//!     let surveys = client
//!         .get_surveys(Query::new().with("per_page", 1))
//!         .await?;
//!     println!("{:?}", surveys.data());
//!
//!     let list = client.create_contact_list(&json!({"name": "Panel"})).await?;
//!     if let Some(id) = list.data().and_then(|d| d["id"].as_str()) {
//!         client.delete_contact_list(id).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::SurveyMonkeyRestClient;
pub use error::{Error, ErrorKind, Result};

// Re-export the request/response types every endpoint uses.
pub use surveymonkey_client::{ApiError, ClientConfig, Query, QueryValue, RequestMethod, Response};
