use std::sync::Arc;
use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spotirelay::management::{CredentialStore, TokenManager};

// Helper function to create a credential store for tests
fn test_store(access: Option<&str>) -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(
        access.map(|s| s.to_string()),
        "refresh-token-1".to_string(),
        "client-id".to_string(),
        "client-secret".to_string(),
    ))
}

fn test_manager(store: Arc<CredentialStore>, server: &MockServer) -> Arc<TokenManager> {
    Arc::new(TokenManager::new(
        store,
        reqwest::Client::new(),
        format!("{}/api/token", server.uri()),
    ))
}

#[tokio::test]
async fn refresh_exchanges_with_basic_auth_and_stores_token() {
    let server = MockServer::start().await;
    let expected_auth = format!("Basic {}", STANDARD.encode("client-id:client-secret"));

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", expected_auth.as_str()))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=refresh-token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "fresh" })))
        .expect(1)
        .mount(&server)
        .await;

    let store = test_store(Some("stale"));
    let tokens = test_manager(Arc::clone(&store), &server);

    let refreshed = tokens.refresh().await.unwrap();

    // The new token is returned and written into the store
    assert_eq!(refreshed, "fresh");
    assert_eq!(store.access_token().await.as_deref(), Some("fresh"));
}

#[tokio::test]
async fn concurrent_refreshes_collapse_into_one_exchange() {
    let server = MockServer::start().await;

    // The delay keeps the exchange in flight while the other callers arrive
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "access_token": "fresh" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tokens = test_manager(test_store(Some("stale")), &server);

    let mut handles = Vec::new();
    for _ in 0..5 {
        let tokens = Arc::clone(&tokens);
        handles.push(tokio::spawn(async move { tokens.refresh().await }));
    }

    // Every caller receives the token produced by the single exchange;
    // the mock expectation verifies exactly one upstream hit on drop
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "fresh");
    }
}

#[tokio::test]
async fn refresh_failure_reaches_every_waiter_and_leaves_token_alone() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "error": "invalid_grant" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = test_store(Some("previous"));
    let tokens = test_manager(Arc::clone(&store), &server);

    let mut handles = Vec::new();
    for _ in 0..3 {
        let tokens = Arc::clone(&tokens);
        handles.push(tokio::spawn(async move { tokens.refresh().await }));
    }

    for handle in handles {
        let result = handle.await.unwrap();

        // All waiters see the one exchange's failure
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("400"));
    }

    // The previously stored token survives the failed exchange
    assert_eq!(store.access_token().await.as_deref(), Some("previous"));
}

#[tokio::test]
async fn settled_outcomes_are_not_cached_across_refreshes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "fresh" })))
        .expect(2)
        .mount(&server)
        .await;

    let tokens = test_manager(test_store(None), &server);

    // Two sequential refreshes issue two exchanges - the pending slot is
    // cleared once an exchange settles
    tokens.refresh().await.unwrap();
    tokens.refresh().await.unwrap();
}

#[tokio::test]
async fn token_response_without_access_token_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "Bearer" })))
        .expect(1)
        .mount(&server)
        .await;

    let store = test_store(None);
    let tokens = test_manager(Arc::clone(&store), &server);

    let result = tokens.refresh().await;

    assert!(result.unwrap_err().contains("missing access_token"));
    // Nothing was written into the store
    assert!(store.access_token().await.is_none());
}

#[tokio::test]
async fn current_returns_stored_token_without_upstream_traffic() {
    // No mocks mounted: any request to the server would 404, and the
    // expectation below proves none is made
    let server = MockServer::start().await;

    let tokens = test_manager(test_store(Some("stored")), &server);

    assert_eq!(tokens.current().await.as_deref(), Some("stored"));
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}
