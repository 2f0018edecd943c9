//! # spark-re-api
//!
//! A client library for the Spark real-estate API.
//!
//! It lists a project's inventory with floor plans, statuses and custom
//! fields joined in. It finds or creates brokerages, lists countries, and
//! registers contacts coming from web forms.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages from the API are sanitized and truncated
//!
//! ## Crates
//!
//! - **spark-client** - Core HTTP client: token auth, compression, error mapping, pagination
//! - **spark-auth** - Credentials from explicit configuration or the environment
//! - **spark-rest** - Inventory, enrichment joins, brokerages, countries, contacts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spark_re_api::SparkRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SPARK_API_KEY (and optionally SPARK_API_URL)
//!     let client = SparkRestClient::from_env()?;
//!
//!     let units = client.get_units_with_details().await?;
//!     println!("{}", serde_json::to_string_pretty(&units)?);
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "auth")]
pub use spark_auth as auth;
#[cfg(feature = "client")]
pub use spark_client as client;
#[cfg(feature = "rest")]
pub use spark_rest as rest;

#[cfg(feature = "auth")]
pub use spark_auth::{Credentials, SparkCredentials};
#[cfg(feature = "client")]
pub use spark_client::{ClientConfig, SparkClient};
#[cfg(feature = "rest")]
pub use spark_rest::{ContactOutcome, SparkRestClient, SubmitMode, Unit, UnitCollection};
