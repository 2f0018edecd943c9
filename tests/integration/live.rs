//! Tests against the real Spark API. Read-only: nothing is created.

use spark_re_api::auth::SparkCredentials;
use spark_re_api::SparkRestClient;

fn live_client() -> SparkRestClient {
    let creds = SparkCredentials::from_env().unwrap_or_else(|e| {
        panic!("Live tests need SPARK_API_KEY (and optionally SPARK_API_URL): {e}")
    });
    SparkRestClient::from_credentials(&creds).expect("Failed to create REST client")
}

#[tokio::test]
#[ignore]
async fn live_units_with_details() {
    let client = live_client();
    let units = client
        .get_units_with_details()
        .await
        .expect("get_units_with_details should succeed");

    for unit in units.values() {
        assert!(unit.floorplan.is_loaded());
        assert!(unit.status.is_loaded());
    }
    println!("Fetched {} units", units.len());
}

#[tokio::test]
#[ignore]
async fn live_countries() {
    let client = live_client();
    let countries = client.get_countries().await.expect("get_countries should succeed");
    assert!(!countries.is_empty());
}
