//! HTTP response handling with Spark-specific extensions.

use std::sync::LazyLock;

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Returns true if this is a 201 Created response.
    pub fn is_created(&self) -> bool {
        self.status() == 201
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Decode the body as JSON. An empty body decodes to `Value::Null`.
    pub async fn json_value(self) -> Result<Value> {
        let body = self.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(Into::into)
    }
}

/// Status code and decoded body of a POST, returned whatever the status.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body (`null` when the body was empty).
    pub data: Value,
}

impl ApiResponse {
    /// Returns true if the API reported `201 Created`.
    pub fn is_created(&self) -> bool {
        self.status == 201
    }

    /// The `error_message` member of the body, if present.
    pub fn error_message(&self) -> Option<String> {
        error_message(&self.data)
    }
}

/// Extension trait for processing Spark API responses.
pub trait ResponseExt {
    /// Check for Spark API errors and convert to appropriate error type.
    fn check_spark_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_spark_error(self) -> Result<Response> {
        let status = self.status();

        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body))
    }
}

/// Extract the upstream `error_message` from a decoded error body.
pub(crate) fn error_message(body: &Value) -> Option<String> {
    match body.get("error_message")? {
        Value::String(message) => Some(sanitize_error_message(message)),
        Value::Null => None,
        other => Some(sanitize_error_message(&other.to_string())),
    }
}

/// Parse error response body and convert to appropriate error kind.
fn parse_error_response(status: u16, body: &str) -> Error {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = error_message(&value) {
            return Error::new(ErrorKind::Api { status, message });
        }
    }

    let sanitized = sanitize_error_message(body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

static TOKEN_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r#"Token\s+token=\\?"[^"\\]*\\?""#).expect("token pattern is valid")
});

static API_KEY_PARAM_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"(api_key|token)=[A-Za-z0-9_\-]{8,}").expect("key pattern is valid")
});

/// Sanitize an error message to prevent exposing credentials.
///
/// Redacts echoed `Token token="..."` headers and `api_key=`/`token=`
/// parameters, then truncates anything longer than 500 characters.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = TOKEN_PATTERN
        .replace_all(message, "Token token=[REDACTED]")
        .to_string();
    sanitized = API_KEY_PARAM_PATTERN
        .replace_all(&sanitized, "$1=[REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
