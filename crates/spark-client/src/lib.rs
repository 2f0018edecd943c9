//! # spark-client
//!
//! Core HTTP client infrastructure for the Spark real-estate API (v2).
//!
//! This crate provides the foundational HTTP client with:
//! - `Token token="..."` authentication on every request
//! - Compression support (gzip, deflate)
//! - Page-number pagination over list resources
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (spark-rest: inventory, enrichment, brokerages, contacts)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SparkClient                            │
//! │  - Holds base URL + API key + HTTP client                   │
//! │  - get_page / post_json / paginate                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   SparkHttpClient                           │
//! │  - Raw HTTP with compression and tracing                    │
//! │  - Response error mapping                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use spark_client::SparkClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), spark_client::Error> {
//!     let client = SparkClient::new(spark_client::DEFAULT_BASE_URL, "api-key")?;
//!
//!     // Every page of a list resource
//!     let units: Vec<serde_json::Value> = client.paginate("inventory", &[]).await?;
//!
//!     // POST, status inspected by the caller
//!     let created = client
//!         .post_json("brokerages", &serde_json::json!({"name": "Acme"}))
//!         .await?;
//!     assert_eq!(created.status, 201);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod spark_client;
mod value;

pub use client::SparkHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::{ApiResponse, Response, ResponseExt};
pub use spark_client::SparkClient;
pub use value::{is_empty_value, json_type, normalize_key};

/// Default Spark API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.spark.re/v2/";

/// Number of records requested per page on every list call.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("spark-re-api/", env!("CARGO_PKG_VERSION"));
