//! End-to-end tests over the HTTP router.
//!
//! Tests marked `requires database` expect `DATABASE_URL` to point at a
//! disposable PostgreSQL database and run with `cargo test -- --ignored`.
//! The rest drive handlers that never touch the database.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use crm_backend::{apply_migrations, router, AllowedOrigins, AppState, Settings};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

fn test_settings(database_url: &str) -> Settings {
    Settings {
        database_url: database_url.to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        frontend_url: "http://localhost:3000".to_string(),
        allowed_origins: AllowedOrigins::parse("http://localhost:3000"),
    }
}

/// App over a lazy pool: good for routes that never hit the database.
fn lazy_app() -> Router {
    let settings = test_settings("postgres://localhost/crm_test");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy(&settings.database_url)
        .unwrap();
    router(AppState { pool, settings })
}

async fn db_app() -> (Router, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    apply_migrations(&pool).await.unwrap();
    let app = router(AppState {
        pool: pool.clone(),
        settings: test_settings(&url),
    });
    (app, pool)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(v) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Nanosecond tag to keep test rows distinct in a shared database.
fn unique_tag() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&lazy_app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn root_reports_service_info() {
    let (status, body) = send(&lazy_app(), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to CRM API");
    assert_eq!(body["frontend_url"], "http://localhost:3000");
    assert_eq!(body["allowed_origins"], json!(["http://localhost:3000"]));
}

#[tokio::test]
async fn version_reports_package() {
    let (status, body) = send(&lazy_app(), Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "crm-backend");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = send(&lazy_app(), Method::GET, "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_email_create_conflicts() {
    let (app, pool) = db_app().await;
    let email = format!("dup-{}@example.com", unique_tag());

    let (status, _) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": "A", "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": "B", "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "conflict");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_email_conflicts_only_with_other_contacts() {
    let (app, _pool) = db_app().await;
    let tag = unique_tag();
    let email_a = format!("a-{}@example.com", tag);
    let email_b = format!("b-{}@example.com", tag);

    let (_, _a) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": "A", "email": email_a})),
    )
    .await;
    let (_, b) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": "B", "email": email_b})),
    )
    .await;
    let b_id = b["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/contacts/{}", b_id),
        Some(json!({"email": email_a})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Re-submitting its own email is not a conflict.
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/contacts/{}", b_id),
        Some(json!({"email": email_b})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], Value::String(email_b));
}

#[tokio::test]
#[ignore = "requires database"]
async fn partial_update_retains_omitted_fields() {
    let (app, _pool) = db_app().await;
    let email = format!("keep-{}@example.com", unique_tag());

    let (_, created) = send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": "Ada", "email": email, "role": "Engineer"})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/contacts/{}", id),
        Some(json!({"role": "CTO"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "CTO");
    assert_eq!(updated["name"], "Ada");
    assert_eq!(updated["email"], Value::String(email));
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_absent_is_not_found_for_every_entity() {
    let (app, _pool) = db_app().await;
    for uri in [
        "/contacts/987654321",
        "/companies/987654321",
        "/leads/987654321",
        "/pipelines/987654321",
        "/activities/987654321",
    ] {
        let (status, body) = send(&app, Method::DELETE, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"]["code"], "not_found", "{}", uri);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_returns_the_deleted_record() {
    let (app, _pool) = db_app().await;
    let name = format!("Gone Corp {}", unique_tag());

    let (_, created) = send(
        &app,
        Method::POST,
        "/companies",
        Some(json!({"name": name})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, deleted) = send(&app, Method::DELETE, &format!("/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["name"], Value::String(name));

    let (status, _) = send(&app, Method::GET, &format!("/companies/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn lead_update_stamps_updated_at() {
    let (app, _pool) = db_app().await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/leads",
        Some(json!({"name": format!("Lead {}", unique_tag())})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["status"], "new");
    let before = chrono::DateTime::parse_from_rfc3339(created["updated_at"].as_str().unwrap())
        .unwrap();

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/leads/{}", id),
        Some(json!({"status": "qualified"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "qualified");
    let after = chrono::DateTime::parse_from_rfc3339(updated["updated_at"].as_str().unwrap())
        .unwrap();
    assert!(after >= before);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_pages_are_bounded_and_disjoint() {
    let (app, _pool) = db_app().await;
    for i in 0..3 {
        send(
            &app,
            Method::POST,
            "/companies",
            Some(json!({"name": format!("Page Co {} {}", i, unique_tag())})),
        )
        .await;
    }

    let (_, first) = send(&app, Method::GET, "/companies?skip=0&limit=2", None).await;
    let (_, second) = send(&app, Method::GET, "/companies?skip=2&limit=2", None).await;
    let first_ids: Vec<i64> = first
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    let second_ids: Vec<i64> = second
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    assert!(first_ids.len() <= 2);
    assert!(second_ids.len() <= 2);
    assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
    let mut sorted = first_ids.clone();
    sorted.sort_unstable();
    assert_eq!(first_ids, sorted);
}

#[tokio::test]
#[ignore = "requires database"]
async fn companies_by_month_buckets_in_order() {
    let (app, pool) = db_app().await;
    sqlx::query(
        "INSERT INTO companies (name, created_at) VALUES \
             ($1, TIMESTAMPTZ '2025-01-15T10:00:00Z'), \
             ($2, TIMESTAMPTZ '2025-03-02T09:00:00Z')",
    )
    .bind(format!("Jan Co {}", unique_tag()))
    .bind(format!("Mar Co {}", unique_tag()))
    .execute(&pool)
    .await
    .unwrap();

    let (status, body) = send(&app, Method::GET, "/analytics/companies-by-month", None).await;
    assert_eq!(status, StatusCode::OK);
    let months: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["month"].as_str().unwrap())
        .collect();

    assert!(months.contains(&"2025-01-01"));
    assert!(months.contains(&"2025-03-01"));
    let mut sorted = months.clone();
    sorted.sort_unstable();
    assert_eq!(months, sorted);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["count"].as_i64().unwrap() >= 1));
}

#[tokio::test]
#[ignore = "requires database"]
async fn deal_search_is_case_insensitive() {
    let (app, _pool) = db_app().await;
    let tag = unique_tag();
    let name = format!("Acme-{} Website Refresh", tag);

    let (status, _) = send(
        &app,
        Method::POST,
        "/pipelines",
        Some(json!({"deal_name": name, "stage": "negotiation", "amount": 1200.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/analytics/deals?q=acme-{}", tag),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let deals = body.as_array().unwrap();
    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0]["deal_name"], Value::String(name));
}

#[tokio::test]
#[ignore = "requires database"]
async fn deal_partial_update_keeps_amount() {
    let (app, _pool) = db_app().await;
    let name = format!("Deal {}", unique_tag());

    let (_, created) = send(
        &app,
        Method::POST,
        "/pipelines",
        Some(json!({"deal_name": name, "amount": 5000.0})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/pipelines/{}", id),
        Some(json!({"stage": "won"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["stage"], "won");
    assert_eq!(updated["amount"], json!(5000.0));
    assert_eq!(updated["deal_name"], created["deal_name"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn contacts_by_role_buckets_null_as_unknown() {
    let (app, _pool) = db_app().await;
    send(
        &app,
        Method::POST,
        "/contacts",
        Some(json!({"name": format!("Roleless {}", unique_tag())})),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/analytics/contacts-by-role", None).await;
    assert_eq!(status, StatusCode::OK);
    let unknown = body
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["role"] == "Unknown")
        .expect("an Unknown bucket");
    assert!(unknown["count"].as_i64().unwrap() >= 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn recent_activities_newest_first() {
    let (app, _pool) = db_app().await;
    let tag = unique_tag();
    send(
        &app,
        Method::POST,
        "/activities",
        Some(json!({"activity_type": "call", "description": format!("older {}", tag)})),
    )
    .await;
    let (_, newest) = send(
        &app,
        Method::POST,
        "/activities",
        Some(json!({"activity_type": "email", "description": format!("newer {}", tag)})),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/analytics/recent-activities?limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let recent = body.as_array().unwrap();
    assert!(recent.len() <= 2);
    assert!(recent.iter().any(|a| a["id"] == newest["id"]));
    let stamps: Vec<chrono::DateTime<chrono::FixedOffset>> = recent
        .iter()
        .map(|a| chrono::DateTime::parse_from_rfc3339(a["created_at"].as_str().unwrap()).unwrap())
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn activity_with_unknown_contact_is_bad_request() {
    let (app, _pool) = db_app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities",
        Some(json!({"activity_type": "call", "contact_id": 987654321})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}
