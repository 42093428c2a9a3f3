//! Integration tests for appointment booking, listing, verification, and
//! deletion.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_booking_is_public() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/appointments",
            Some(serde_json::json!({
                "name": "AliceVisitor",
                "company": "Acme",
                "purpose": "Meeting",
                "phoneNo": "555-0100",
                "date": "2026-09-01",
                "time": "10:00",
                "verification": false,
                "staff": { "username": "bob" },
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Appointment created successfully");
}

#[tokio::test]
async fn test_staff_booking_and_verification_flow() {
    let app = helpers::TestApp::new();
    let token = app.staff_token("alice", "pw1").await;

    app.book_appointment("BobVisitor", "alice").await;

    let response = app
        .request("GET", "/staff-appointments/alice", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("name").unwrap().as_str().unwrap(), "BobVisitor");
    assert_eq!(rows[0].get("phoneNo").unwrap().as_str().unwrap(), "555-0100");
    assert_eq!(
        rows[0]
            .get("staff")
            .unwrap()
            .get("username")
            .unwrap()
            .as_str()
            .unwrap(),
        "alice"
    );
    assert!(!rows[0].get("verification").unwrap().as_bool().unwrap());

    let response = app
        .request(
            "PUT",
            "/appointments/BobVisitor",
            Some(serde_json::json!({ "verification": true })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Appointment verification updated successfully");

    let response = app
        .request("GET", "/staff-appointments/alice", None, Some(&token))
        .await;
    let rows = response.body.as_array().unwrap();
    assert!(rows[0].get("verification").unwrap().as_bool().unwrap());
}

#[tokio::test]
async fn test_staff_cannot_list_other_staff_appointments() {
    let app = helpers::TestApp::new();
    let alice = app.staff_token("alice", "pw1").await;
    app.staff_token("carol", "pw2").await;

    let response = app
        .request("GET", "/staff-appointments/carol", None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_listing_requires_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/staff-appointments/alice", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_verification_by_non_owner_is_not_found() {
    let app = helpers::TestApp::new();
    app.staff_token("alice", "pw1").await;
    let mallory = app.staff_token("mallory", "pw2").await;

    app.book_appointment("BobVisitor", "alice").await;

    let response = app
        .request(
            "PUT",
            "/appointments/BobVisitor",
            Some(serde_json::json!({ "verification": true })),
            Some(&mallory),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body.get("message").unwrap().as_str().unwrap(),
        "Appointment not found"
    );
}

#[tokio::test]
async fn test_verification_requires_staff_role() {
    let app = helpers::TestApp::new();
    let guard = app.security_token("guard1", "pw1").await;

    let response = app
        .request(
            "PUT",
            "/appointments/BobVisitor",
            Some(serde_json::json!({ "verification": true })),
            Some(&guard),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_is_idempotent_and_unscoped() {
    let app = helpers::TestApp::new();
    app.staff_token("alice", "pw1").await;
    let mallory = app.staff_token("mallory", "pw2").await;

    app.book_appointment("BobVisitor", "alice").await;

    // Any staff member may delete, not only the owner.
    let response = app
        .request("DELETE", "/appointments/BobVisitor", None, Some(&mallory))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Appointment deleted successfully");

    // Deleting again still reports success.
    let response = app
        .request("DELETE", "/appointments/BobVisitor", None, Some(&mallory))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_requires_staff_role() {
    let app = helpers::TestApp::new();
    let guard = app.security_token("guard1", "pw1").await;

    let response = app
        .request("DELETE", "/appointments/BobVisitor", None, Some(&guard))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_security_listing_with_name_filter() {
    let app = helpers::TestApp::new();
    let guard = app.security_token("guard1", "pw1").await;

    app.book_appointment("BobJones", "alice").await;
    app.book_appointment("EveSmith", "alice").await;

    let response = app
        .request("GET", "/appointments?name=bob", None, Some(&guard))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("name").unwrap().as_str().unwrap(), "BobJones");

    let response = app.request("GET", "/appointments", None, Some(&guard)).await;
    let rows = response.body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_security_listing_rejects_staff_token() {
    let app = helpers::TestApp::new();
    let staff = app.staff_token("alice", "pw1").await;

    let response = app.request("GET", "/appointments", None, Some(&staff)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
