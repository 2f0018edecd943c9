//! Error types for spark-rest.

/// Result type alias for spark-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for spark-rest operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// The transport-level error this error wraps, if it came from spark-client.
    pub fn client_error(&self) -> Option<&spark_client::Error> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<spark_client::Error>())
    }

    /// HTTP status code associated with the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::BrokerageCreation { status, .. } => Some(*status),
            _ => self.client_error().and_then(spark_client::Error::status),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Auth error: {0}")]
    Auth(String),
    #[error("Brokerage creation failed ({status}): {message}")]
    BrokerageCreation { status: u16, message: String },
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<spark_client::Error> for Error {
    fn from(err: spark_client::Error) -> Self {
        Error {
            kind: ErrorKind::Client(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<spark_auth::Error> for Error {
    fn from(err: spark_auth::Error) -> Self {
        Error {
            kind: ErrorKind::Auth(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::Json(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}
