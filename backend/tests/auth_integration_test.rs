//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_and_login() {
    let app = common::TestApp::new().await;
    let email = format!("user-{}@example.com", uuid::Uuid::new_v4());

    let body = json!({ "email": email, "password": "test-password-123" });
    let (status, response) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let tokens: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!tokens["access_token"].as_str().unwrap().is_empty());
    assert_eq!(tokens["token_type"], "Bearer");

    let (status, _) = app.post("/api/v1/auth/login", &body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email_conflicts() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({ "email": user.email, "password": "another-password" });
    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_rejects_weak_password() {
    let app = common::TestApp::new().await;

    let body = json!({ "email": "weak@example.com", "password": "short" });
    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_unauthorized() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let body = json!({ "email": user.email, "password": "wrong-password" });
    let (status, _) = app.post("/api/v1/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_returns_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, body) = app.get_auth("/api/v1/auth/me", &user.access_token).await;

    assert_eq!(status, StatusCode::OK);
    let profile: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(profile["email"], user.email);
}
