//! End-to-end tests for the HTTP surface, driven through the router with a
//! scripted provider double.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use listpilot_provider::MockProvider;
use listpilot_server::{Server, ServerConfig};

const SESSION_HEADER: &str = "x-session-id";

fn test_app(provider: Arc<MockProvider>) -> Router {
    Server::new(provider, ServerConfig::default()).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_session(uri: &str, session_id: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(SESSION_HEADER, session_id)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json_with_session(uri: &str, session_id: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(SESSION_HEADER, session_id)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Connect through POST /oauth/token and return the issued session id.
async fn connect(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json("/oauth/token", json!({"code": "abc123"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get(SESSION_HEADER)
        .expect("session header missing")
        .to_str()
        .unwrap()
        .to_string()
}

fn valid_draft() -> Value {
    json!({
        "listId": "list-1",
        "subject": "Hello",
        "htmlContent": "<p>Hi</p>",
        "fromName": "Acme",
        "replyTo": "news@acme.com"
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// OAuth connect flow
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_token_exchange_establishes_session() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());

    let response = app
        .clone()
        .oneshot(post_json("/oauth/token", json!({"code": "abc123"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let session_id = response
        .headers()
        .get(SESSION_HEADER)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(!session_id.is_empty());

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["isConnected"], true);
    assert_eq!(body["data"]["accountName"], "Acme");
    assert_eq!(body["data"]["userEmail"], "a@acme.com");

    assert_eq!(provider.exchange_calls(), 1);
    assert_eq!(provider.metadata_calls(), 1);

    // The issued identifier resolves through /status
    let response = app
        .oneshot(get_with_session("/status", &session_id))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["isConnected"], true);
    assert_eq!(body["data"]["accountName"], "Acme");
    assert_eq!(body["data"]["userEmail"], "a@acme.com");
}

#[tokio::test]
async fn test_token_exchange_missing_code_is_client_error() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());

    let response = app
        .oneshot(post_json("/oauth/token", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert!(body["message"].as_str().unwrap().contains("code"));
    // Validation short-circuits before any outbound call
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_token_exchange_upstream_failure_is_server_error() {
    let provider = Arc::new(MockProvider::new().failing_exchange());
    let app = test_app(provider);

    let response = app
        .oneshot(post_json("/oauth/token", json!({"code": "abc123"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_callback_success_redirects_with_session() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider);

    let response = app
        .clone()
        .oneshot(get("/oauth-callback?code=abc123&state=xyz"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    assert!(location.starts_with("http://localhost:3000/oauth-callback?success=true"));
    assert!(location.contains("account_name=Acme"));
    assert!(location.contains("user_email=a%40acme.com"));

    // The redirected session id resolves to a live session
    let session_id = location
        .split("session_id=")
        .nth(1)
        .unwrap()
        .split('&')
        .next()
        .unwrap()
        .to_string();
    let response = app
        .oneshot(get_with_session("/status", &session_id))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["isConnected"], true);
}

#[tokio::test]
async fn test_callback_provider_denial_redirects_with_error() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());

    let response = app
        .oneshot(get(
            "/oauth-callback?error=access_denied&error_description=User%20rejected",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();

    assert!(location.contains("error=provider_denied"));
    assert!(location.contains("error_description="));
    assert!(!location.contains("success=true"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_callback_missing_code_redirects_with_error() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());

    let response = app.oneshot(get("/oauth-callback")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();

    assert!(location.contains("error=missing_authorization_code"));
    assert!(provider.calls().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Status and disconnect
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_without_session_is_not_an_error() {
    let app = test_app(Arc::new(MockProvider::new()));

    let response = app.oneshot(get("/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["isConnected"], false);
    assert!(body["data"].get("accountName").is_none());
}

#[tokio::test]
async fn test_status_with_unknown_session_reports_unconnected() {
    let app = test_app(Arc::new(MockProvider::new()));

    let response = app
        .oneshot(get_with_session("/status", "never-issued"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["isConnected"], false);
}

#[tokio::test]
async fn test_disconnect_revokes_session() {
    let app = test_app(Arc::new(MockProvider::new()));
    let session_id = connect(&app).await;

    let response = app
        .clone()
        .oneshot(post_json_with_session("/disconnect", &session_id, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["isConnected"], false);

    // Gated calls now fail with the uniform unauthorized error, not stale data
    let response = app
        .oneshot(get_with_session("/lists", &session_id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_disconnect_is_idempotent() {
    let app = test_app(Arc::new(MockProvider::new()));
    let session_id = connect(&app).await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json_with_session("/disconnect", &session_id, json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Unknown identifier is also fine
    let response = app
        .oneshot(post_json_with_session("/disconnect", "never-issued", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ─────────────────────────────────────────────────────────────────────────────
// Lists
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_lists_requires_session() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());

    let response = app.oneshot(get("/lists")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert_eq!(provider.lists_calls(), 0);
}

#[tokio::test]
async fn test_lists_for_connected_session() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());
    let session_id = connect(&app).await;

    let response = app
        .oneshot(get_with_session("/lists", &session_id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["lists"][0]["id"], "list-1");
    assert_eq!(body["data"]["lists"][0]["name"], "Newsletter");
    assert_eq!(body["data"]["lists"][0]["stats"]["memberCount"], 120);
    assert_eq!(provider.lists_calls(), 1);
}

#[tokio::test]
async fn test_lists_upstream_failure() {
    let provider = Arc::new(MockProvider::new().failing_lists());
    let app = test_app(provider);
    let session_id = connect(&app).await;

    let response = app
        .oneshot(get_with_session("/lists", &session_id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ─────────────────────────────────────────────────────────────────────────────
// Campaign send
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_campaign_send_end_to_end() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());
    let session_id = connect(&app).await;

    let response = app
        .oneshot(post_json_with_session(
            "/campaign/send",
            &session_id,
            valid_draft(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["campaignId"], "cmp_1");
    assert_eq!(body["data"]["status"], "sent");
    assert_eq!(body["data"]["message"], "Campaign sent successfully");

    // Exactly three upstream campaign calls, in order
    assert_eq!(
        provider.calls(),
        vec![
            "exchange_code",
            "fetch_account_metadata",
            "create_campaign",
            "set_campaign_content",
            "send_campaign",
        ]
    );
}

#[tokio::test]
async fn test_campaign_send_requires_session() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());

    let response = app
        .oneshot(post_json("/campaign/send", valid_draft()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(provider.create_calls(), 0);
}

#[tokio::test]
async fn test_campaign_send_rejects_empty_field_before_upstream() {
    let provider = Arc::new(MockProvider::new());
    let app = test_app(provider.clone());
    let session_id = connect(&app).await;

    let mut draft = valid_draft();
    draft["listId"] = json!("");
    let response = app
        .oneshot(post_json_with_session("/campaign/send", &session_id, draft))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("listId"));
    assert_eq!(provider.create_calls(), 0);
    assert_eq!(provider.content_calls(), 0);
    assert_eq!(provider.send_calls(), 0);
}

#[tokio::test]
async fn test_campaign_send_stops_after_content_failure() {
    let provider = Arc::new(MockProvider::new().failing_content());
    let app = test_app(provider.clone());
    let session_id = connect(&app).await;

    let response = app
        .oneshot(post_json_with_session(
            "/campaign/send",
            &session_id,
            valid_draft(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(provider.create_calls(), 1);
    assert_eq!(provider.content_calls(), 1);
    assert_eq!(provider.send_calls(), 0);
}
