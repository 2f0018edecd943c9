//! High-level Spark client with typed HTTP methods and pagination.
//!
//! This module provides `SparkClient`, which combines the API key with
//! an HTTP client and exposes the two primitives every Spark operation is
//! built from: a (paged) GET and a POST whose status the caller inspects.
//!
//! ## Security
//!
//! - The API key is redacted in Debug output
//! - The API key is skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::SparkHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::ApiResponse;
use crate::value::{is_empty_value, json_type};
use crate::DEFAULT_PAGE_SIZE;

/// High-level Spark API client.
///
/// Designed to be used by higher-level crates (spark-rest) that know the
/// resource names and record shapes.
///
/// # Example
///
/// ```rust,ignore
/// use spark_client::SparkClient;
///
/// let client = SparkClient::new("https://api.spark.re/v2/", api_key)?;
///
/// // One page (page=None sends only per_page)
/// let countries = client.get_page("countries", &[], None).await?;
///
/// // Every page
/// let statuses: Vec<serde_json::Value> = client.paginate("inventory-statuses", &[]).await?;
/// ```
#[derive(Clone)]
pub struct SparkClient {
    http: SparkHttpClient,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl std::fmt::Debug for SparkClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparkClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl SparkClient {
    /// Create a new Spark client for the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(base_url, api_key, ClientConfig::default())
    }

    /// Create a new Spark client with custom configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;

        let http = SparkHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Set the number of records requested per page.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Get the base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the page size sent as `per_page`.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &SparkHttpClient {
        &self.http
    }

    /// Build the full URL for a resource path.
    ///
    /// Example: `url("inventory-statuses")` -> `https://api.spark.re/v2/inventory-statuses`
    pub fn url(&self, resource: &str) -> String {
        if resource.starts_with("http://") || resource.starts_with("https://") {
            return resource.to_string();
        }
        format!("{}/{}", self.base_url, resource.trim_start_matches('/'))
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.token_auth(&self.api_key)
    }

    // =========================================================================
    // Transport
    // =========================================================================

    /// GET one page of a resource.
    ///
    /// Sends `filters` as query parameters, followed by `per_page` and, when
    /// `page` is given, `page`. Returns the decoded body; an empty body is
    /// `Value::Null`.
    #[instrument(skip(self, filters), fields(resource = %resource))]
    pub async fn get_page(
        &self,
        resource: &str,
        filters: &[(&str, &str)],
        page: Option<u32>,
    ) -> Result<Value> {
        let mut request = self.authed(self.http.get(self.url(resource)));
        for (name, value) in filters {
            request = request.query(*name, *value);
        }
        request = request.query("per_page", self.page_size.to_string());
        if let Some(page) = page {
            request = request.query("page", page.to_string());
        }

        let response = self.http.send(request).await?;
        response.json_value().await
    }

    /// POST a JSON body to a resource.
    ///
    /// The status code is returned rather than checked, so callers can tell
    /// `201 Created` apart from validation failures.
    #[instrument(skip(self, body), fields(resource = %resource))]
    pub async fn post_json<B: Serialize>(&self, resource: &str, body: &B) -> Result<ApiResponse> {
        let request = self.authed(self.http.post(self.url(resource))).json(body)?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        let success = response.is_success();
        let body = response.text().await?;

        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&body) {
                Ok(data) => data,
                // Error pages (proxies, 5xx) are not JSON; keep the text.
                Err(_) if !success => Value::String(crate::response::sanitize_error_message(&body)),
                Err(e) => return Err(e.into()),
            }
        };
        Ok(ApiResponse { status, data })
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Fetch every page of a list resource and concatenate the items.
    ///
    /// Pages are requested from 1 upwards until the API returns an empty
    /// page (`null`, `[]`, `{}` ...). Any failure aborts the whole listing,
    /// so callers never see a partial collection.
    #[instrument(skip(self, filters), fields(resource = %resource))]
    pub async fn paginate<T: DeserializeOwned>(
        &self,
        resource: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut all_records = Vec::new();
        let mut page_number: u32 = 1;

        loop {
            let page = self.get_page(resource, filters, Some(page_number)).await?;
            if is_empty_value(&page) {
                break;
            }

            let items = match page {
                Value::Array(items) => items,
                other => {
                    return Err(Error::new(ErrorKind::UnexpectedPayload(format!(
                        "page {} of {} is not a list: {}",
                        page_number,
                        resource,
                        json_type(&other)
                    ))));
                }
            };

            debug!(page = page_number, count = items.len(), "Fetched page");
            for item in items {
                all_records.push(serde_json::from_value(item)?);
            }
            page_number += 1;
        }

        debug!(
            pages = page_number - 1,
            total = all_records.len(),
            "Pagination complete"
        );
        Ok(all_records)
    }
}
