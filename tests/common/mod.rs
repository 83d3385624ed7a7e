//! Shared helpers for the integration suites
//!
//! Each test initializes a real `ServerState` against a throwaway SQLite
//! file, builds the full application router and drives it in-process.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use employee_server::core::{Config, ServerState};
use employee_server::db::models::{EmployeeInput, UserCreate};
use employee_server::db::repository::{employee as employee_repo, user as user_repo};

/// Fresh state backed by a temp-directory SQLite file
pub async fn test_state() -> (ServerState, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Config {
        database_path: dir.path().join("test.db").to_string_lossy().into_owned(),
        ..Config::default()
    };
    let state = ServerState::initialize(&config)
        .await
        .expect("initialize server state");
    (state, dir)
}

pub async fn seed_account(
    state: &ServerState,
    username: &str,
    password: &str,
    permissions: &[&str],
) {
    user_repo::create(
        state.pool(),
        UserCreate {
            username: username.to_string(),
            password: password.to_string(),
            permissions: permissions.iter().map(|s| s.to_string()).collect(),
        },
    )
    .await
    .expect("seed account");
}

pub async fn seed_employee(
    state: &ServerState,
    first_name: &str,
    last_name: &str,
    title: &str,
) -> i64 {
    employee_repo::create(
        state.pool(),
        &EmployeeInput {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            title: title.to_string(),
        },
    )
    .await
    .expect("seed employee")
    .id
}

/// Send one request through the full middleware stack and parse the body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "testserver");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse response body")
    };
    (status, json)
}

/// Exchange credentials for a token through the API
pub async fn obtain_token(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api-token-auth/",
        None,
        Some(json!({"username": username, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "token exchange failed: {body}");
    body["token"]
        .as_str()
        .expect("token in response")
        .to_string()
}
