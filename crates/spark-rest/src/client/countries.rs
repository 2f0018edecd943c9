use serde_json::Value;
use spark_client::is_empty_value;
use tracing::instrument;

use crate::error::{Error, ErrorKind, Result};
use crate::types::Country;

impl super::SparkRestClient {
    /// List countries. This endpoint is not paginated.
    #[instrument(skip(self))]
    pub async fn get_countries(&self) -> Result<Vec<Country>> {
        let body = self.client.get_page(super::COUNTRIES, &[], None).await?;

        if is_empty_value(&body) {
            return Ok(Vec::new());
        }

        match body {
            Value::Array(items) => Ok(serde_json::from_value(Value::Array(items))?),
            other => Err(Error::new(ErrorKind::UnexpectedResponse(format!(
                "countries returned a non-list body: {other}"
            )))),
        }
    }
}
