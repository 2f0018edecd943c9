//! Credentials trait and implementations.
//!
//! All credential types implement custom Debug to redact the API key.

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::{API_KEY_ENV_VARS, BASE_URL_ENV_VARS};

/// Trait for Spark credentials.
pub trait Credentials: Send + Sync {
    /// Get the API base URL.
    fn base_url(&self) -> &str;

    /// Get the API key.
    fn api_key(&self) -> &str;

    /// Returns true if the credentials appear to be valid (non-empty).
    fn is_valid(&self) -> bool {
        !self.base_url().is_empty() && !self.api_key().is_empty()
    }
}

/// Standard Spark credentials: an API key and the base URL it is valid for.
///
/// The API key is redacted in Debug output to prevent accidental exposure
/// in logs.
#[derive(Clone)]
pub struct SparkCredentials {
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for SparkCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparkCredentials")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl SparkCredentials {
    /// Create credentials for the default Spark endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: spark_client::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the credentials at another base URL (proxy, staging, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required: `SPARK_API_KEY` or `SPARK_RE_API_KEY`.
    ///
    /// Optional: `SPARK_API_URL` or `SPARK_RE_API_URL`
    /// (default: `https://api.spark.re/v2/`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(*name).filter(|value| !value.trim().is_empty()))
        };

        let api_key = first(API_KEY_ENV_VARS)
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(API_KEY_ENV_VARS[0].to_string())))?;

        let mut creds = Self::new(api_key.trim());
        if let Some(base_url) = first(BASE_URL_ENV_VARS) {
            debug!(base_url = %base_url, "Using base URL from environment");
            creds = creds.with_base_url(base_url.trim());
        }

        creds.validate()?;
        Ok(creds)
    }

    /// Check that the key can be sent in a header and the URL parses.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "API key is empty".to_string(),
            )));
        }
        if self
            .api_key
            .chars()
            .any(|c| c == '"' || c.is_whitespace() || c.is_control())
        {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "API key contains quotes, whitespace or control characters".to_string(),
            )));
        }

        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::Config(format!(
                "Unsupported base URL scheme: {}",
                url.scheme()
            ))));
        }

        Ok(())
    }
}

impl Credentials for SparkCredentials {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}
