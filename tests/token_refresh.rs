//! Interceptor behavior: bearer attachment, 401 recovery, retry-once,
//! forced logout, and refresh coalescing.

use std::sync::Arc;

use plotchain_client::{ApiClient, ApiConfig, ApiError, MemoryTokenStore, SessionState};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with(server: &MockServer, store: Arc<MemoryTokenStore>) -> ApiClient {
    // RUST_LOG=debug surfaces the interceptor decisions when a test fails
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    ApiClient::new(ApiConfig::with_base_url(server.uri()), store).unwrap()
}

#[tokio::test]
async fn attaches_bearer_header_when_token_stored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/analytics/platform"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_properties": 12
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    let client = client_with(&server, store);

    let metrics = client.analytics().platform().await.unwrap();
    assert_eq!(metrics.total_properties, Some(12));
}

#[tokio::test]
async fn sends_without_authorization_header_when_no_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/analytics/platform"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_with(&server, store);

    client.analytics().platform().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("authorization"),
        "unauthenticated request must carry no Authorization header"
    );
}

#[tokio::test]
async fn refreshes_once_and_replays_original_request() {
    let server = MockServer::start().await;

    // First attempt with the stale token is rejected.
    Mock::given(method("GET"))
        .and(path("/v1/properties"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .and(body_json(serde_json::json!({"refresh_token": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "A2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Replay with the refreshed token succeeds.
    Mock::given(method("GET"))
        .and(path("/v1/properties"))
        .and(header("Authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "p-1", "title": "Dockside Lofts"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    let client = client_with(&server, store.clone());

    let properties = client.properties().list(&Default::default()).await.unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].id.as_deref(), Some("p-1"));

    // The new access token was persisted; the refresh token is untouched.
    use plotchain_client::TokenStore;
    assert_eq!(store.access_token().as_deref(), Some("A2"));
    assert_eq!(store.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn refresh_failure_clears_tokens_and_publishes_expiry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/properties"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(500).set_body_string("refresh backend down"))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    let client = client_with(&server, store.clone());
    let mut events = client.session_events();

    let result = client.properties().list(&Default::default()).await;
    assert!(matches!(result, Err(ApiError::SessionExpired)));

    use plotchain_client::TokenStore;
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());

    events.changed().await.unwrap();
    assert_eq!(*events.borrow(), SessionState::Expired);
}

#[tokio::test]
async fn missing_refresh_token_fails_without_calling_refresh_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // Access token present, refresh token absent.
    let store = Arc::new(MemoryTokenStore::new());
    {
        use plotchain_client::TokenStore;
        store.set_access_token("A1").unwrap();
    }
    let client = client_with(&server, store);

    let result = client.users().get_profile().await;
    assert!(matches!(result, Err(ApiError::SessionExpired)));
}

#[tokio::test]
async fn second_401_propagates_without_third_attempt() {
    let server = MockServer::start().await;

    // Both the original attempt and the replay are rejected.
    Mock::given(method("GET"))
        .and(path("/v1/properties"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "A2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    let client = client_with(&server, store);

    let result = client.properties().list(&Default::default()).await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
    // expect(2) on the properties mock verifies no third attempt went out.
}

#[tokio::test]
async fn non_401_errors_propagate_without_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/properties/p-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such property"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    let client = client_with(&server, store.clone());

    let result = client.properties().get("p-404").await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));

    // Tokens survive a non-auth failure.
    use plotchain_client::TokenStore;
    assert_eq!(store.access_token().as_deref(), Some("A1"));
}

#[tokio::test]
async fn concurrent_401s_share_a_single_refresh() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/properties"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    // The delay widens the window in which the second request's recovery
    // must coalesce onto the first one's exchange.
    Mock::given(method("POST"))
        .and(path("/v1/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access_token": "A2"}))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/properties"))
        .and(header("Authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("A1", "R1"));
    let client = client_with(&server, store);

    let service_a = client.properties();
    let service_b = client.properties();
    let query = Default::default();
    let (a, b) = tokio::join!(service_a.list(&query), service_b.list(&query));

    assert!(a.is_ok());
    assert!(b.is_ok());
    // expect(1) on the refresh mock verifies the exchanges coalesced.
}
