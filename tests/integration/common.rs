use serde_json::{json, Value};
use spark_re_api::SparkRestClient;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "integration-test-key";

/// Client pointed at the mock server, with the test key.
pub fn client_for(server: &MockServer) -> SparkRestClient {
    SparkRestClient::new(format!("{}/v2/", server.uri()), API_KEY)
        .expect("Failed to create REST client")
}

/// Serve `items` as page 1 of `resource` and an empty page 2.
///
/// Both mocks require the token header and `per_page=100`.
pub async fn mount_list(server: &MockServer, resource: &str, items: Value) {
    let route = format!("/v2/{resource}");
    let auth = format!("Token token=\"{API_KEY}\"");

    Mock::given(method("GET"))
        .and(path(route.as_str()))
        .and(header("Authorization", auth.as_str()))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(route.as_str()))
        .and(header("Authorization", auth.as_str()))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(server)
        .await;
}

/// Route tracing output to the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
