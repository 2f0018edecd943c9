//! # spark-auth
//!
//! Credentials for the Spark API.
//!
//! Spark authenticates every request with a static API key sent as
//! `Authorization: Token token="<key>"`. The key is per-project
//! configuration: it is injected when a client is built and never
//! hard-coded or held in global state.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Error messages never include the key
//!
//! ## Example
//!
//! ```rust,ignore
//! use spark_auth::{Credentials, SparkCredentials};
//!
//! // Explicit
//! let creds = SparkCredentials::new("api-key");
//!
//! // From SPARK_API_KEY / SPARK_API_URL
//! let creds = SparkCredentials::from_env()?;
//! assert!(creds.is_valid());
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, SparkCredentials};
pub use error::{Error, ErrorKind, Result};

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: &[&str] = &["SPARK_API_KEY", "SPARK_RE_API_KEY"];

/// Environment variables checked for the base URL, in order.
pub const BASE_URL_ENV_VARS: &[&str] = &["SPARK_API_URL", "SPARK_RE_API_URL"];
