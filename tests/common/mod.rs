use collins_client::CollinsClient;

/// Basic Auth header value for the test credentials below.
#[allow(dead_code)]
pub const TEST_AUTH_HEADER: &str = "Basic dGVzdC11c2VyOnRlc3QtcGFzc3dvcmQ=";

/// Set up a test client with predefined credentials
pub fn setup_test_client(mock_server_uri: &str) -> CollinsClient {
    let _ = env_logger::builder().is_test(true).try_init();

    CollinsClient::builder()
        .base_url(mock_server_uri)
        .username("test-user")
        .password("test-password")
        .build()
        .expect("Failed to build CollinsClient")
}
