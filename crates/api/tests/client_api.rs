//! HTTP-level integration tests for the `/api/clients` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the
//! router without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{body_json, delete, get, post_json, put_json};
use sqlx::SqlitePool;

fn parse_ts(value: &serde_json::Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_client_returns_201_with_assigned_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Jane Doe", "email": "jane@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert!(json["phone"].is_null());
    assert_eq!(json["created_at"], json["updated_at"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_client_missing_required_field_returns_422(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/clients", serde_json::json!({"name": "No Email"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_client_duplicate_email_returns_409(pool: SqlitePool) {
    let body = serde_json::json!({"name": "Jane", "email": "jane@example.com"});

    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/clients", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json(app, "/api/clients", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["detail"], "Client email already in use");
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_client_returns_404_with_detail(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/clients/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Client not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_phone_changes_only_phone(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/clients",
            serde_json::json!({"name": "Jane Doe", "email": "jane@example.com"}),
        )
        .await,
    )
    .await;
    let prior_updated_at = parse_ts(&created["updated_at"]);

    // Let the clock advance so the refreshed timestamp is strictly greater.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/clients/1",
        serde_json::json!({"phone": "555-1234"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["phone"], "555-1234");
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["email"], "jane@example.com");
    assert!(parse_ts(&json["updated_at"]) > prior_updated_at);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_empty_body_is_a_noop_except_updated_at(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/clients",
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555-0000"
            }),
        )
        .await,
    )
    .await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/clients/1", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], created["name"]);
    assert_eq!(json["email"], created["email"]);
    assert_eq!(json["phone"], created["phone"]);
    assert_eq!(json["created_at"], created["created_at"]);
    assert!(parse_ts(&json["updated_at"]) > parse_ts(&created["updated_at"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_explicit_null_clears_phone(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-0000"
        }),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/clients/1", serde_json::json!({"phone": null})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["phone"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_client_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/clients/999", serde_json::json!({"name": "X"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Client not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_to_taken_email_returns_409(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "A", "email": "a@example.com"}),
    )
    .await;
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "B", "email": "b@example.com"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/clients/2",
        serde_json::json!({"email": "a@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_get_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Jane", "email": "jane@example.com"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/clients/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/clients/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_idempotent(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Jane", "email": "jane@example.com"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let first = delete(app, "/api/clients/1").await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let second = delete(app, "/api/clients/1").await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_never_created_id_returns_204(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/clients/999").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
