//! Employee CRUD integration tests
//!
//! Drives the full application (middleware stack included) against a
//! throwaway SQLite database. Accounts: "root" holds employee:write,
//! "reg" holds no permissions.

mod common;

use axum::Router;
use http::StatusCode;
use serde_json::json;
use tempfile::TempDir;

use employee_server::api;
use employee_server::core::ServerState;

const TOO_LONG_NAME: &str = "Johniddasfeufhfweffsdfdsbvsdvdsuhfiuhwefwef";

async fn setup() -> (Router, ServerState, TempDir, String, String) {
    let (state, dir) = common::test_state().await;
    common::seed_account(&state, "root", "toor", &["employee:write"]).await;
    common::seed_account(&state, "reg", "reg", &[]).await;
    let app = api::build_app(&state);
    let writer = common::obtain_token(&app, "root", "toor").await;
    let limited = common::obtain_token(&app, "reg", "reg").await;
    (app, state, dir, writer, limited)
}

// ── Create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_employee_create() {
    let (app, _state, _dir, writer, _) = setup().await;

    let data = json!({"first_name": "John", "last_name": "Doe", "title": "Manager"});
    let (status, body) = common::send(
        &app,
        "POST",
        "/api/v1/employee/",
        Some(&writer),
        Some(data.clone()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["first_name"], "John");
    assert_eq!(body["last_name"], "Doe");
    assert_eq!(body["title"], "Manager");

    // The self-link is canonical and resolvable
    let url = body["url"].as_str().expect("url in response");
    let path = url
        .strip_prefix("http://testserver")
        .expect("absolute url against request host");
    let (status, fetched) = common::send(&app, "GET", path, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_employee_create_no_permission_fail() {
    let (app, _state, _dir, _, limited) = setup().await;

    let data = json!({"first_name": "John", "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/employee/",
        Some(&limited),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_employee_create_unauth_fail() {
    let (app, _state, _dir, _, _) = setup().await;

    let data = json!({"first_name": "John", "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(&app, "POST", "/api/v1/employee/", None, Some(data)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_employee_create_not_enough_fields_fail() {
    let (app, _state, _dir, writer, _) = setup().await;

    let data = json!({"first_name": "John", "last_name": "Doe"});
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/employee/",
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employee_create_too_long_name_fail() {
    let (app, _state, _dir, writer, _) = setup().await;

    let data = json!({"first_name": TOO_LONG_NAME, "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/employee/",
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── List / Retrieve ─────────────────────────────────────────────────

#[tokio::test]
async fn test_list_employees() {
    let (app, state, _dir, _, _) = setup().await;
    common::seed_employee(&state, "John", "Doe", "Manager").await;
    common::seed_employee(&state, "Jane", "Doe", "Engineer").await;

    // No authentication required for reads
    let (status, body) = common::send(&app, "GET", "/api/v1/employee/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array body").len(), 2);
}

#[tokio::test]
async fn test_get_employee() {
    let (app, state, _dir, _, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, body) =
        common::send(&app, "GET", &format!("/api/v1/employee/{id}/"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "John");
    assert_eq!(
        body["url"],
        format!("http://testserver/api/v1/employee/{id}/")
    );
}

#[tokio::test]
async fn test_get_employee_pk_not_found_fail() {
    let (app, _state, _dir, _, _) = setup().await;

    let (status, _) = common::send(&app, "GET", "/api/v1/employee/3/", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_employee_pk_improper_fail() {
    let (app, _state, _dir, _, _) = setup().await;

    let (status, _) = common::send(&app, "GET", "/api/v1/employee/John/", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Full update (PUT) ───────────────────────────────────────────────

#[tokio::test]
async fn test_put_employee() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let data = json!({"first_name": "Johnny", "last_name": "Doe", "title": "Manager"});
    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/employee/{id}/"),
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Johnny");
}

#[tokio::test]
async fn test_put_employee_no_permission_fail() {
    let (app, state, _dir, _, limited) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let data = json!({"first_name": "John", "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/employee/{id}/"),
        Some(&limited),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_put_employee_unauth_fail() {
    let (app, state, _dir, _, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let data = json!({"first_name": "John", "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/employee/{id}/"),
        None,
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_put_employee_partial_fail() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let data = json!({"first_name": "Jane", "title": "Manager"});
    let (status, body) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/employee/{id}/"),
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Partial update will be rejected");
}

#[tokio::test]
async fn test_put_employee_not_found_pk_create() {
    let (app, _state, _dir, writer, _) = setup().await;

    let data = json!({"first_name": "Michael", "last_name": "Bolton", "title": "Engineer"});
    let (status, body) = common::send(
        &app,
        "PUT",
        "/api/v1/employee/3/",
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "url": "http://testserver/api/v1/employee/3/",
            "first_name": "Michael",
            "last_name": "Bolton",
            "title": "Engineer"
        })
    );

    // The record exists at the requested id afterwards
    let (status, _) = common::send(&app, "GET", "/api/v1/employee/3/", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_put_employee_too_long_name_fail() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let data = json!({"first_name": TOO_LONG_NAME, "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(
        &app,
        "PUT",
        &format!("/api/v1/employee/{id}/"),
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Partial update (PATCH) ──────────────────────────────────────────

#[tokio::test]
async fn test_patch_employee() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let data = json!({"first_name": "Johnny"});
    let (status, body) = common::send(
        &app,
        "PATCH",
        &format!("/api/v1/employee/{id}/"),
        Some(&writer),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "Johnny");
    // Untouched fields keep their values
    assert_eq!(body["last_name"], "Doe");
    assert_eq!(body["title"], "Manager");
}

#[tokio::test]
async fn test_patch_employee_no_permission_fail() {
    let (app, state, _dir, _, limited) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, _) = common::send(
        &app,
        "PATCH",
        &format!("/api/v1/employee/{id}/"),
        Some(&limited),
        Some(json!({"first_name": "John"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_patch_employee_unauth_fail() {
    let (app, state, _dir, _, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, _) = common::send(
        &app,
        "PATCH",
        &format!("/api/v1/employee/{id}/"),
        None,
        Some(json!({"first_name": "John"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_patch_employee_not_found_pk_fail() {
    let (app, _state, _dir, writer, _) = setup().await;

    let (status, _) = common::send(
        &app,
        "PATCH",
        "/api/v1/employee/6/",
        Some(&writer),
        Some(json!({"title": "Engineer"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_employee_no_data() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, body) = common::send(
        &app,
        "PATCH",
        &format!("/api/v1/employee/{id}/"),
        Some(&writer),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "John");
}

#[tokio::test]
async fn test_patch_employee_too_long_name_fail() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, _) = common::send(
        &app,
        "PATCH",
        &format!("/api/v1/employee/{id}/"),
        Some(&writer),
        Some(json!({"first_name": TOO_LONG_NAME})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_employee() {
    let (app, state, _dir, writer, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let uri = format!("/api/v1/employee/{id}/");
    let (status, body) = common::send(&app, "DELETE", &uri, Some(&writer), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = common::send(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_employee_no_permission_fail() {
    let (app, state, _dir, _, limited) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, _) = common::send(
        &app,
        "DELETE",
        &format!("/api/v1/employee/{id}/"),
        Some(&limited),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_employee_unauth_fail() {
    let (app, state, _dir, _, _) = setup().await;
    let id = common::seed_employee(&state, "John", "Doe", "Manager").await;

    let (status, _) = common::send(
        &app,
        "DELETE",
        &format!("/api/v1/employee/{id}/"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_employee_not_found_pk_fail() {
    let (app, _state, _dir, writer, _) = setup().await;

    let (status, _) = common::send(&app, "DELETE", "/api/v1/employee/6/", Some(&writer), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Auth/permission precedence ──────────────────────────────────────

#[tokio::test]
async fn test_auth_checked_before_validation() {
    let (app, _state, _dir, _, limited) = setup().await;

    // Payload is invalid either way; status must reflect credentials only
    let bad = json!({"first_name": TOO_LONG_NAME});
    let (status, _) = common::send(&app, "POST", "/api/v1/employee/", None, Some(bad.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/employee/",
        Some(&limited),
        Some(bad),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let (app, _state, _dir, _, _) = setup().await;

    let data = json!({"first_name": "John", "last_name": "Doe", "title": "Manager"});
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/v1/employee/",
        Some("deadbeefdeadbeefdeadbeefdeadbeefdeadbeef"),
        Some(data),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
