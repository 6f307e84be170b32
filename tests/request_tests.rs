use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use collins_client::CollinsError;
use common::{setup_test_client, TEST_AUTH_HEADER};

#[tokio::test]
async fn test_basic_auth_attached_to_every_request() {
    // What it tests: Every outgoing request carries the Basic Auth header derived from the
    // configured credentials; the mock only matches when the header is present and correct.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets"))
        .and(header("authorization", TEST_AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success:ok",
            "data": {"Data": []}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    client.assets().find_all().await.expect("authenticated request should match");
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/asset/sl-102313"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.assets().get("sl-102313").await {
        Err(CollinsError::DecodeError(_)) => {}
        other => panic!("Expected DecodeError for non-JSON body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_status_400_is_outside_accepted_range() {
    // The accepted range is [200, 400); 400 itself must fail.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/asset/sl-102313"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.assets().get("sl-102313").await {
        Err(CollinsError::UnexpectedStatus { status, body }) => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("Expected UnexpectedStatus for 400, got {other:?}"),
    }
}

#[cfg(feature = "default-client")]
#[tokio::test]
async fn test_static_instance_round_trip() {
    // What it tests: A client stored with initialize() is the one instance() hands back, and it
    // is usable for requests as-is.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success:ok",
            "data": {"Data": []}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    collins_client::initialize(setup_test_client(&mock_server.uri()));

    let client = collins_client::instance();
    let results = client.assets().find_all().await.expect("request should succeed");
    assert!(results.data.assets.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // What it tests: Connection-level failures surface as TransportError, distinct from the
    // status-code errors produced once a response arrives.
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = setup_test_client(&uri);
    match client.assets().find_all().await {
        Err(CollinsError::TransportError(_)) => {}
        other => panic!("Expected TransportError for unreachable server, got {other:?}"),
    }
}
