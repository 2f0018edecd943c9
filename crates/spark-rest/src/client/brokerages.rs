use serde_json::{json, Value};
use spark_client::is_empty_value;
use tracing::{info, instrument};

use crate::error::{Error, ErrorKind, Result};
use crate::types::Brokerage;

impl super::SparkRestClient {
    /// Find a brokerage by exact name, creating it when none exists.
    ///
    /// The lookup and the create are separate requests; two callers racing
    /// on the same new name can both create it.
    #[instrument(skip(self))]
    pub async fn get_brokerage(&self, name: &str) -> Result<Brokerage> {
        let existing = self
            .client
            .get_page(super::BROKERAGES, &[("name_eq", name)], None)
            .await?;

        match &existing {
            Value::Array(items) => {
                if let Some(first) = items.first() {
                    return Ok(serde_json::from_value(first.clone())?);
                }
            }
            other if !is_empty_value(other) => {
                return Err(Error::new(ErrorKind::UnexpectedResponse(format!(
                    "brokerage lookup returned a non-list body: {other}"
                ))));
            }
            _ => {}
        }

        info!("Brokerage not found, creating it");
        let created = self
            .client
            .post_json(super::BROKERAGES, &json!({ "name": name }))
            .await?;

        if created.is_created() {
            return Ok(serde_json::from_value(created.data)?);
        }

        let message = created
            .error_message()
            .unwrap_or_else(|| "brokerage could not be created".to_string());
        Err(Error::new(ErrorKind::BrokerageCreation {
            status: created.status,
            message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SparkRestClient;
    use crate::error::ErrorKind;
    use crate::types::RecordId;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_existing_brokerage_no_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brokerages"))
            .and(query_param("name_eq", "Acme & Sons"))
            .and(query_param("per_page", "100"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 7, "name": "Acme & Sons"},
                {"id": 8, "name": "Acme & Sons"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/brokerages"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = SparkRestClient::new(server.uri(), "key").unwrap();
        let brokerage = client.get_brokerage("Acme & Sons").await.unwrap();

        assert_eq!(brokerage.id, RecordId::Int(7));
    }

    #[tokio::test]
    async fn test_unknown_brokerage_is_created() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brokerages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/brokerages"))
            .and(body_json(json!({"name": "Acme"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": 12, "name": "Acme"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SparkRestClient::new(server.uri(), "key").unwrap();
        let brokerage = client.get_brokerage("Acme").await.unwrap();

        assert_eq!(brokerage.id, RecordId::Int(12));
        assert_eq!(brokerage.name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_brokerage_creation_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brokerages"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/brokerages"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(json!({"error_message": "Name has already been taken"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SparkRestClient::new(server.uri(), "key").unwrap();
        let err = client.get_brokerage("Acme").await.unwrap_err();

        match err.kind {
            ErrorKind::BrokerageCreation { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Name has already been taken");
            }
            other => panic!("unexpected kind: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_brokerage_lookup_failure_skips_create() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/brokerages"))
            .respond_with(ResponseTemplate::new(401).set_body_string("HTTP Token: Access denied."))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/brokerages"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = SparkRestClient::new(server.uri(), "key").unwrap();
        let err = client.get_brokerage("Acme").await.unwrap_err();

        assert!(err.client_error().unwrap().is_auth_error());
    }
}
