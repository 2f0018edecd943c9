use serde_json::json;
use spark_re_api::rest::{RecordId, Related};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{client_for, init_tracing, mount_list};

#[tokio::test]
async fn test_units_with_details_end_to_end() {
    init_tracing();
    let server = MockServer::start().await;

    mount_list(
        &server,
        "inventory",
        json!([
            {"id": 1, "name": "PH-1", "floorplan_id": 10, "status_id": 2, "price": 1250000},
            {"id": 2, "name": "PH-2", "floorplan_id": 11, "status_id": 2, "price": 990000}
        ]),
    )
    .await;
    mount_list(&server, "floorplans", json!([{"id": 10, "name": "Penthouse A"}])).await;
    mount_list(&server, "inventory-statuses", json!([{"id": 2, "name": "Available"}])).await;
    mount_list(
        &server,
        "additional-fields",
        json!([
            {"id": 500, "inventory_id": 1, "name": "Lot Size", "value": "40x120"},
            {"id": 501, "inventory_id": 2, "name": "Parking Spots", "value": 2}
        ]),
    )
    .await;

    let client = client_for(&server);
    let units = client.get_units_with_details().await.unwrap();
    assert_eq!(units.len(), 2);

    let out = serde_json::to_value(&units).unwrap();
    assert_eq!(
        out["1"],
        json!({
            "id": 1,
            "name": "PH-1",
            "floorplan_id": 10,
            "status_id": 2,
            "price": 1250000,
            "floorplan": {"id": 10, "name": "Penthouse A"},
            "status": {"id": 2, "name": "Available"},
            "lot_size": "40x120"
        })
    );
    assert_eq!(out["2"]["floorplan"], serde_json::Value::Null);
    assert_eq!(out["2"]["status"]["name"], json!("Available"));
    assert_eq!(out["2"]["parking_spots"], json!(2));

    let second = &units[&RecordId::Int(2)];
    assert_eq!(second.floorplan, Related::Unresolved);
}

#[tokio::test]
async fn test_pagination_collects_every_page() {
    let server = MockServer::start().await;
    let pages = [100, 100, 100, 37, 0];
    let mut next_id = 0;

    for (index, size) in pages.iter().enumerate() {
        let items: Vec<_> = (0..*size)
            .map(|_| {
                next_id += 1;
                json!({"id": next_id})
            })
            .collect();
        Mock::given(method("GET"))
            .and(path("/v2/inventory"))
            .and(query_param("page", (index + 1).to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(items))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let units = client.get_units().await.unwrap();

    assert_eq!(units.len(), 337);
    assert_eq!(server.received_requests().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_failed_page_fails_whole_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/inventory"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/inventory"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error_message": "Project access denied"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_units().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("Project access denied"));
}

#[tokio::test]
async fn test_countries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 38, "name": "Canada"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let countries = client.get_countries().await.unwrap();

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].id, RecordId::Int(38));
}
