//! Transport settings for talking to the Spark API.
//!
//! Every call is a single GET or POST, and paginated listings fetch one page
//! per round trip, so `timeout` bounds one page rather than a whole listing.
//! Nothing here retries: a timed-out page fails the listing it belongs to.

use std::time::Duration;

/// Settings for the HTTP client behind [`crate::SparkClient`].
///
/// The defaults allow 30s for one page of up to `per_page` records and 10s
/// to reach the API host.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound for one request, i.e. one page of a listing.
    pub timeout: Duration,
    /// Upper bound for opening a connection to the API host.
    pub connect_timeout: Duration,
    /// How long a connection stays pooled between page requests.
    pub pool_idle_timeout: Duration,
    /// Idle connections kept for the API host. Inventory enrichment issues
    /// its lookups concurrently, so a handful is enough.
    pub pool_max_idle_per_host: usize,
    /// Sent as `User-Agent`; defaults to this crate's name and version.
    pub user_agent: String,
    /// Ask for gzip/deflate bodies. Large inventory pages compress well.
    pub accept_compressed: bool,
    /// Log each request and its status at debug level.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            accept_compressed: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`], starting from the defaults.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Accept or refuse compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    /// Per-request (per-page) timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Connect timeout for the API host.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Identify the calling application, e.g. `inventory-sync/1.0`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
