//! # sm-auth
//!
//! SurveyMonkey authentication: the OAuth 2.0 authorization-code flow and
//! the credentials the API client needs.
//!
//! ## Security
//!
//! - Secrets and tokens are redacted in Debug output
//! - Tracing spans skip the authorization code
//! - Transport error messages never echo the token request form
//!
//! ## Example
//!
//! ```rust,ignore
//! use surveymonkey_auth::{ApiCredentials, Authenticator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), surveymonkey_auth::Error> {
//!     let auth = Authenticator::from_env()?;
//!
//!     // 1. Send the user here; SurveyMonkey redirects back with ?code=...
//!     println!("{}", auth.authorize_url()?);
//!
//!     // 2. Exchange the code for a long-lived token.
//!     let token = auth.get_token("code-from-redirect").await?;
//!     let client = token.to_credentials("api-key").client()?;
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod oauth;

pub use credentials::ApiCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{Authenticator, TokenResponse};
