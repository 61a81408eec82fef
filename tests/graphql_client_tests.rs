//! Integration tests for `GraphqlClient` against a local HTTP server.
//!
//! Each test stands up a `wiremock` server so no real network traffic is
//! made. They cover the request shape and every error variant `execute`
//! can return.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use heb_graphql::queries::{
    build_category_browse_query, build_store_search_query, CategoryBrowseParams,
    StoreSearchParams,
};
use heb_graphql::{ClientError, EndpointUrl, GraphqlClient, HebConfig, SessionCookie};

fn create_test_client(server: &MockServer) -> GraphqlClient {
    let config = HebConfig::builder()
        .endpoint(EndpointUrl::new(format!("{}/graphql", server.uri())).unwrap())
        .session_cookie(SessionCookie::new("sst=test-cookie").unwrap())
        .user_agent("heb-graphql-test/0.1")
        .build()
        .unwrap();
    GraphqlClient::new(config).unwrap()
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_execute_sends_configured_headers_and_body() {
    let server = MockServer::start().await;
    let document = build_store_search_query(&StoreSearchParams::default());

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(header("user-agent", "heb-graphql-test/0.1"))
        .and(header("cookie", "sst=test-cookie"))
        .and(body_json(json!({
            "query": document.query(),
            "variables": {"address": "1803 West Bronze St, Pharr, TX"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"searchStoresByAddress": {"stores": []}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let envelope = client.execute(&document).await.unwrap();

    assert_eq!(
        envelope.data(),
        Some(&json!({"searchStoresByAddress": {"stores": []}}))
    );
}

#[tokio::test]
async fn test_execute_sends_category_id_as_variable() {
    let server = MockServer::start().await;
    let document = build_category_browse_query(&CategoryBrowseParams::default());

    Mock::given(method("POST"))
        .and(body_json(json!({
            "query": document.query(),
            "variables": {"categoryId": "490113"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let envelope = client.execute(&document).await.unwrap();

    assert!(envelope.data().is_none());
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_server_error_is_attempted_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .execute(&build_store_search_query(&StoreSearchParams::default()))
        .await;

    match result {
        Err(ClientError::Http { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .execute(&build_store_search_query(&StoreSearchParams::default()))
        .await;

    assert!(
        matches!(result, Err(ClientError::Http { status: 201, .. })),
        "expected Http 201, got: {result:?}"
    );
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Access Denied</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client
        .execute(&build_store_search_query(&StoreSearchParams::default()))
        .await;

    assert!(
        matches!(result, Err(ClientError::Decode(_))),
        "expected Decode error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_graphql_errors_are_kept_in_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Store not found", "path": ["browseCategory"]}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let envelope = client
        .execute(&build_category_browse_query(&CategoryBrowseParams::default()))
        .await
        .unwrap();

    let errors = envelope.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Store not found");
    assert_eq!(errors[0].path.as_deref(), Some("browseCategory"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let server = MockServer::start().await;
    let client = create_test_client(&server);
    drop(server);

    let result = client
        .execute(&build_store_search_query(&StoreSearchParams::default()))
        .await;

    assert!(
        matches!(result, Err(ClientError::Transport(_))),
        "expected Transport error, got: {result:?}"
    );
}

#[test]
fn test_graphql_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
}
