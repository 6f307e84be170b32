use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;

#[tokio::test]
async fn test_cloned_clients_issue_independent_requests() {
    // What it tests: The client holds only immutable configuration, so clones can issue
    // requests from concurrent tasks without coordination; every request still arrives
    // authenticated and well-formed.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/asset/sl-102313"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success:ok",
            "data": {"ASSET": {"ID": 42, "TAG": "sl-102313", "STATUS": "Allocated", "TYPE": "SERVER_NODE"}}
        })))
        .expect(8)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.assets().get("sl-102313").await
        }));
    }

    for handle in handles {
        let asset = handle
            .await
            .expect("task should not panic")
            .expect("request should succeed")
            .expect("asset should be present");
        assert_eq!(asset.data.asset.tag, "sl-102313");
    }
}
