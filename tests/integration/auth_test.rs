//! Integration tests for registration, login, and logout.

mod helpers;

use http::StatusCode;

use vms_auth::jwt::decoder::JwtDecoder;
use vms_core::config::auth::AuthConfig;
use vms_entity::principal::Role;

fn test_decoder() -> JwtDecoder {
    JwtDecoder::new(&AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_minutes: None,
    })
}

#[tokio::test]
async fn test_register_then_login_security() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/register-security",
            Some(serde_json::json!({ "username": "guard1", "password": "pw1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Security registered successfully");

    let token = app.login("/login-security", "guard1", "pw1").await;
    let claims = test_decoder().decode_token(&token).unwrap();
    assert_eq!(claims.username, "guard1");
    assert_eq!(claims.role, Role::Security);
}

#[tokio::test]
async fn test_register_staff_requires_security_role() {
    let app = helpers::TestApp::new();
    let body = serde_json::json!({ "username": "alice", "password": "pw1" });

    // No token at all
    let response = app
        .request("POST", "/register-staff", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // A staff token is not enough
    let staff = app.staff_token("bob", "pw-bob").await;
    let response = app
        .request("POST", "/register-staff", Some(body.clone()), Some(&staff))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // A security token works
    let guard = app.security_token("guard1", "pw1").await;
    let response = app
        .request("POST", "/register-staff", Some(body), Some(&guard))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Staff registered successfully");

    let token = app.login("/login-staff", "alice", "pw1").await;
    let claims = test_decoder().decode_token(&token).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, Role::Staff);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = helpers::TestApp::new();
    let body = serde_json::json!({ "username": "guard1", "password": "pw1" });

    let response = app
        .request("POST", "/register-security", Some(body.clone()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("POST", "/register-security", Some(body), None)
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body.get("message").unwrap().as_str().unwrap(),
        "Username already exists"
    );
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.security_token("guard1", "pw1").await;

    let wrong_password = app
        .request(
            "POST",
            "/login-security",
            Some(serde_json::json!({ "username": "guard1", "password": "wrong" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/login-security",
            Some(serde_json::json!({ "username": "nobody", "password": "pw1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let app = helpers::TestApp::new();

    // The helper always sends a Bearer scheme; this garbage payload fails
    // token validation.
    let response = app
        .request("POST", "/logout", None, Some("not-a-bearer-scheme"))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // A non-Bearer scheme never reaches validation.
    let req = http::Request::builder()
        .method("POST")
        .uri("/logout")
        .header("Authorization", "Basic abc123")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_body_is_validation_error() {
    let app = helpers::TestApp::new();

    let req = http::Request::builder()
        .method("POST")
        .uri("/login-staff")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not-json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), req)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Body rejections use the standard error envelope.
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.get("error").unwrap().as_str().unwrap(), "VALIDATION");
    assert!(body.get("message").unwrap().as_str().is_some());
}

#[tokio::test]
async fn test_garbage_token_is_forbidden() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/logout", None, Some("not.a.valid.token"))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_succeeds_and_does_not_revoke_token() {
    let app = helpers::TestApp::new();
    let token = app.security_token("guard1", "pw1").await;

    let response = app.request("POST", "/logout", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Logged out successfully");

    // Token verification is stateless, so the signed token still works.
    let response = app.request("GET", "/appointments", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_security_login_reuses_token_until_logout() {
    let app = helpers::TestApp::new();
    app.security_token("guard1", "pw1").await;

    let first = app.login("/login-security", "guard1", "pw1").await;
    let second = app.login("/login-security", "guard1", "pw1").await;
    assert_eq!(first, second);

    let response = app.request("POST", "/logout", None, Some(&first)).await;
    assert_eq!(response.status, StatusCode::OK);

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let third = app.login("/login-security", "guard1", "pw1").await;
    assert_ne!(first, third);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "ok");
}
