// End-to-end tests for the auth gateway over the in-memory store

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use admin_dashboard_api::auth::hash_password;
use admin_dashboard_api::content::ContentClient;
use admin_dashboard_api::handlers::{router, AppState};
use admin_dashboard_api::models::UserRecord;
use admin_dashboard_api::session::{SessionConfig, SessionManager};
use admin_dashboard_api::store::memory::MemoryStore;
use admin_dashboard_api::store::CredentialStore;

async fn test_app() -> Router {
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryStore::new());
    store
        .put_user(&UserRecord {
            id: "1".to_string(),
            email: "admin@x.com".to_string(),
            name: "Admin".to_string(),
            password_hash: hash_password("admin123").unwrap(),
        })
        .await
        .unwrap();

    let sessions = Arc::new(SessionManager::new(store.clone(), SessionConfig::default()));
    let content = ContentClient::new("http://localhost:4000").unwrap();

    router(AppState {
        store,
        sessions,
        content,
    })
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

#[tokio::test]
async fn test_login_success_returns_session_and_user() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "admin@x.com", "password": "admin123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["sessionId"].as_str().unwrap().len() >= 32);
    assert_eq!(body["user"]["id"], "1");
    assert_eq!(body["user"]["email"], "admin@x.com");
    assert_eq!(body["user"]["name"], "Admin");
    // The secret never appears in a response
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password_is_401() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "admin@x.com", "password": "wrong" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_same_shape_as_wrong_password() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "nobody@x.com", "password": "admin123" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_validate_unknown_token_is_200_invalid() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/auth/session",
        json!({ "sessionId": "session:nonexistent-token" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["user"], Value::Null);
}

#[tokio::test]
async fn test_validate_missing_session_id_is_200_invalid() {
    let app = test_app().await;

    let (status, body) = post_json(&app, "/api/auth/session", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["user"], Value::Null);
}

#[tokio::test]
async fn test_full_login_validate_logout_cycle() {
    let app = test_app().await;

    let (_, login_body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "admin@x.com", "password": "admin123" }),
    )
    .await;
    let session_id = login_body["sessionId"].as_str().unwrap().to_string();

    let (status, body) = post_json(
        &app,
        "/api/auth/session",
        json!({ "sessionId": session_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["user"]["email"], "admin@x.com");

    let (status, body) = post_json(
        &app,
        "/api/auth/logout",
        json!({ "sessionId": session_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Logged out successfully");

    // The token is gone now
    let (status, body) = post_json(
        &app,
        "/api/auth/session",
        json!({ "sessionId": session_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["user"], Value::Null);

    // Logging out twice is not an error
    let (status, _) = post_json(
        &app,
        "/api/auth/logout",
        json!({ "sessionId": session_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_login_body_is_500() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn test_malformed_validate_body_degrades_to_invalid() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["valid"], false);
    assert_eq!(body["user"], Value::Null);
}

#[tokio::test]
async fn test_seed_users_then_login() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/users/init",
        json!({
            "users": [
                { "id": "7", "email": "editor@x.com", "name": "Editor", "password": "editor123" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "email": "editor@x.com", "password": "editor123" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Editor");
}

#[tokio::test]
async fn test_protected_content_rejects_missing_session() {
    let app = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/forms")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_content_rejects_stale_token() {
    let app = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/books")
        .header("Authorization", "Bearer session:nonexistent-token")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "admin-dashboard-api");
}
