//! Integration tests for the Charla HTTP client

use std::sync::Arc;

use charla_core::{MemoryTokenStore, TokenStore};
use charla_http::client::ApiClient;
use charla_http::error::ClientError;
use charla_http::types::{LoginRequest, SendMessageRequest};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("charla_http=debug")
        .try_init();
}

fn store() -> Arc<dyn TokenStore> {
    Arc::new(MemoryTokenStore::new())
}

fn no_authorization_header(request: &Request) -> bool {
    !request.headers.contains_key("authorization")
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("https://example.com/api/")
        .token_store(store())
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "https://example.com/api/");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().token_store(store()).build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_requires_token_store() {
    let result = ApiClient::builder().base_url("http://localhost:8000/").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_malformed_base_url() {
    let result = ApiClient::builder()
        .base_url("not a url")
        .token_store(store())
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_bearer_token_attached_with_exact_value() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token("abc123"));
    let client = ApiClient::new(mock_server.uri(), tokens).unwrap();

    let messages = client.list_messages().await.unwrap();
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(no_authorization_header)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), store()).unwrap();

    let result = client.list_messages().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_empty_token_sends_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(no_authorization_header)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::with_token(""));
    let client = ApiClient::new(mock_server.uri(), tokens).unwrap();

    assert!(client.list_messages().await.is_ok());
}

#[tokio::test]
async fn test_token_store_is_read_at_dispatch_time() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(no_authorization_header)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(mock_server.uri(), tokens.clone()).unwrap();

    // First dispatch: store empty, no header.
    client.list_messages().await.unwrap();

    // Login flow writes the token; the same client picks it up.
    tokens.set("fresh-token");
    client.list_messages().await.unwrap();
}

#[tokio::test]
async fn test_login_returns_token_and_next_request_carries_it() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "sender": "ana",
                "content": "hola",
                "sent_at": "2025-06-01T12:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(mock_server.uri(), tokens.clone()).unwrap();

    let response = client
        .login(LoginRequest {
            username: "ana".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.token, "abc123");

    // The login view persists the token; the shared client sees it.
    tokens.set(&response.token);

    let messages = client.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender, "ana");
}

#[tokio::test]
async fn test_send_message_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/messages"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "sender": "ana",
            "content": "hola",
            "sent_at": "2025-06-01T12:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), store()).unwrap();

    let message = client
        .send_message(SendMessageRequest {
            content: "hola".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(message.id, 7);
    assert_eq!(message.content, "hola");
}

#[tokio::test]
async fn test_trailing_slash_base_url_joins_cleanly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/", mock_server.uri());
    let client = ApiClient::new(base_url.clone(), store()).unwrap();

    // Reported exactly as configured, joined without a doubled slash.
    assert_eq!(client.base_url(), base_url);
    assert!(client.list_messages().await.is_ok());
}

#[tokio::test]
async fn test_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), store()).unwrap();

    let result = client.list_messages().await;
    match result {
        Err(error) => {
            assert!(matches!(error, ClientError::AuthenticationFailed(_)));
            assert!(error.is_auth_failure());
        }
        Ok(_) => panic!("expected an authentication error"),
    }
}

#[tokio::test]
async fn test_logout_ignores_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri(), store()).unwrap();
    assert!(client.logout().await.is_ok());
}
