use serde_json::json;
use spark_re_api::rest::ContactStatus;
use spark_re_api::SubmitMode;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::client_for;

#[tokio::test]
async fn test_web_form_contact_with_existing_brokerage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/brokerages"))
        .and(query_param("name_eq", "Harbour Realty"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 31, "name": "Harbour Realty"}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/brokerages"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/contacts"))
        .and(body_json(json!({
            "first_name": "Grace",
            "email": "grace@example.com",
            "brokerage_id": 31,
            "standardized_fields_attributes": {"7": {"value": "Website"}, "8": {"value": ""}},
            "additional_fields": [{"standardized_field_id": 7, "value": "Website"}],
            "answers": {"4": {"answers": ["2 bedrooms"]}},
            "question_answers": [{"question_id": 4, "answers": ["2 bedrooms"]}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 4242})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client
        .submit_contact(&json!({
            "first_name": "Grace",
            "last_name": "",
            "phone": null,
            "email": "grace@example.com",
            "brokerage_name": "Harbour Realty",
            "standardized_fields_attributes": {"7": {"value": "Website"}, "8": {"value": ""}},
            "answers": {"4": {"answers": ["2 bedrooms"]}}
        }))
        .await
        .unwrap();

    assert_eq!(outcome.status, ContactStatus::Success);
    assert_eq!(outcome.data, Some(json!({"id": 4242})));
}

#[tokio::test]
async fn test_rejected_contact_reports_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/contacts"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error_message": "Email has already been taken"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome = client
        .submit_contact_with(&json!({"email": "grace@example.com"}), SubmitMode::Passthrough)
        .await
        .unwrap();

    assert_eq!(outcome.status, ContactStatus::Failed);
    assert_eq!(outcome.message, "Email has already been taken");
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({"status": "failed", "message": "Email has already been taken"})
    );
}

#[tokio::test]
async fn test_brokerage_creation_failure_aborts_contact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/brokerages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/brokerages"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/contacts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit_contact(&json!({"email": "a@b.c", "brokerage_name": "New Co"}))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
}
