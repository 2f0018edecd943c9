//! Spark REST API client.
//!
//! This client wraps `SparkClient` from `spark-client` and provides typed
//! methods for the inventory, enrichment, brokerage, country and contact
//! endpoints.

use spark_auth::{Credentials, SparkCredentials};
use spark_client::{ClientConfig, SparkClient};

use crate::error::Result;

mod brokerages;
mod contacts;
mod countries;
mod enrichment;
mod inventory;

pub(crate) const INVENTORY: &str = "inventory";
pub(crate) const FLOORPLANS: &str = "floorplans";
pub(crate) const INVENTORY_STATUSES: &str = "inventory-statuses";
pub(crate) const ADDITIONAL_FIELDS: &str = "additional-fields";
pub(crate) const BROKERAGES: &str = "brokerages";
pub(crate) const COUNTRIES: &str = "countries";
pub(crate) const CONTACTS: &str = "contacts";

/// Spark REST API client.
///
/// # Example
///
/// ```rust,ignore
/// use spark_rest::SparkRestClient;
///
/// let client = SparkRestClient::new("https://api.spark.re/v2/", "api_key_here")?;
///
/// // Every unit with its floor plan, status and custom fields.
/// let units = client.get_units_with_details().await?;
///
/// // Find or create a brokerage.
/// let brokerage = client.get_brokerage("Acme Realty").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SparkRestClient {
    client: SparkClient,
}

impl SparkRestClient {
    /// Create a new REST client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = SparkClient::new(base_url, api_key)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SparkClient::with_config(base_url, api_key, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from validated credentials.
    pub fn from_credentials(credentials: &SparkCredentials) -> Result<Self> {
        credentials.validate()?;
        Self::new(credentials.base_url(), credentials.api_key())
    }

    /// Create a REST client from `SPARK_API_KEY` / `SPARK_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_credentials(&SparkCredentials::from_env()?)
    }

    /// Create a REST client from an existing SparkClient.
    pub fn from_client(client: SparkClient) -> Self {
        Self { client }
    }

    /// Get the underlying SparkClient.
    pub fn inner(&self) -> &SparkClient {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn page_size(&self) -> u32 {
        self.client.page_size()
    }

    /// Set the number of records requested per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.client = self.client.with_page_size(page_size);
        self
    }
}
