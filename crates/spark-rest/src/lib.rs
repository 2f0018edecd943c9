//! # spark-rest
//!
//! Spark real-estate API client: inventory listing with floor plan, status
//! and custom field joins, brokerage lookup-or-create, countries, and
//! contact registration.
//!
//! ## Features
//!
//! - **Inventory** - Every unit across all pages, keyed by id
//! - **Enrichment** - Attach floor plans, statuses and additional fields
//! - **Brokerages** - Find by exact name or create
//! - **Contacts** - Sanitize web-form payloads and register them
//!
//! ## Example
//!
//! ```rust,ignore
//! use spark_rest::SparkRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), spark_rest::Error> {
//!     let client = SparkRestClient::from_env()?;
//!
//!     let units = client.get_units_with_details().await?;
//!     for unit in units.values() {
//!         println!("{} {:?}", unit.id, unit.status().and_then(|s| s.name.as_deref()));
//!     }
//!
//!     let outcome = client
//!         .submit_contact(&serde_json::json!({
//!             "email": "ada@example.com",
//!             "brokerage_name": "Acme Realty"
//!         }))
//!         .await?;
//!     println!("{}", outcome.message);
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod collection;
pub mod contact;
pub mod enrichment;
mod error;
mod types;

pub use client::SparkRestClient;

pub use collection::{dedup_by_id, key_by_id, Identified};
pub use contact::{sanitize_contact, ContactOutcome, ContactStatus, SanitizedContact, SubmitMode};
pub use enrichment::field_attribute_name;
pub use error::{Error, ErrorKind, Result};
pub use types::{
    AdditionalField, Brokerage, Country, FloorPlan, InventoryStatus, RecordId, Related, Unit,
    UnitCollection,
};

// Re-export client pieces callers need to configure the transport.
pub use spark_client::{ApiResponse, ClientConfig, SparkClient};
