//! End-to-end tests for the full gardend stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! store, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use garden_adapter_http_axum::router;
use garden_adapter_http_axum::state::AppState;
use garden_adapter_storage_sqlite_sqlx::{Config, SqliteDocumentStore};
use garden_app::services::diagnostics_service::{ConfigPresence, DiagnosticsService};
use garden_app::services::record_service::RecordService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let store = SqliteDocumentStore::new(db.pool().clone());
    let presence = ConfigPresence {
        database_url: true,
        database_name: false,
    };

    router::build(AppState::new(
        RecordService::new(store.clone()),
        DiagnosticsService::new(store, presence),
    ))
}

async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn post(app: &axum::Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &axum::Router, uri: &str) -> Response {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `body` and return the generated id, asserting `201 Created`.
async fn create(app: &axum::Router, uri: &str, body: &Value) -> String {
    let response = post(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri} {body}");
    json_body(response).await["id"]
        .as_str()
        .expect("id should be a string")
        .to_owned()
}

async fn list(app: &axum::Router, uri: &str) -> Vec<Value> {
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    match json_body(response).await {
        Value::Array(items) => items,
        other => panic!("expected array, got {other}"),
    }
}

// ---------------------------------------------------------------------------
// Liveness & diagnostics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_liveness_message() {
    let app = app().await;
    let body = json_body(get(&app, "/").await).await;
    assert_eq!(body["message"], "Garden Services API running");
}

#[tokio::test]
async fn should_report_connected_store_and_collections() {
    let app = app().await;
    create(&app, "/providers", &json!({ "name": "Green Thumbs" })).await;

    let body = json_body(get(&app, "/test").await).await;
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["collections"], json!(["provider"]));
}

// ---------------------------------------------------------------------------
// Providers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_and_list_provider_with_generated_id() {
    let app = app().await;
    let input = json!({
        "name": "Green Thumbs",
        "email": "hello@greenthumbs.io",
        "phone": "+351 912 345 678",
        "service_areas": ["Lisbon", "Sintra"],
        "rating": 4.5,
    });

    let id = create(&app, "/providers", &input).await;
    assert!(!id.is_empty());

    let items = list(&app, "/providers").await;
    assert_eq!(items.len(), 1);
    let provider = &items[0];
    assert_eq!(provider["id"], id.as_str());
    assert_eq!(provider["name"], "Green Thumbs");
    assert_eq!(provider["email"], "hello@greenthumbs.io");
    assert_eq!(provider["service_areas"], json!(["Lisbon", "Sintra"]));
    assert_eq!(provider["rating"], 4.5);
    assert_eq!(provider["is_active"], true);
    assert!(provider.get("_id").is_none());
}

#[tokio::test]
async fn should_reject_provider_rating_above_five_without_writing() {
    let app = app().await;

    let response = post(&app, "/providers", &json!({ "name": "Overrated", "rating": 6 })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["fields"][0]["field"], "rating");

    assert!(list(&app, "/providers").await.is_empty());
}

#[tokio::test]
async fn should_accept_provider_rating_bounds() {
    let app = app().await;
    create(&app, "/providers", &json!({ "name": "Zero", "rating": 0 })).await;
    create(&app, "/providers", &json!({ "name": "Five", "rating": 5 })).await;
    assert_eq!(list(&app, "/providers").await.len(), 2);
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_service_with_defaults() {
    let app = app().await;
    let id = create(
        &app,
        "/services",
        &json!({ "title": "Lawn Mowing", "base_price": 30, "duration_estimate_min": 60 }),
    )
    .await;

    let items = list(&app, "/services").await;
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["base_price"], 30.0);
    assert_eq!(items[0]["duration_estimate_min"], 60);
    assert_eq!(items[0]["is_active"], true);
    assert_eq!(items[0]["description"], Value::Null);
}

#[tokio::test]
async fn should_reject_negative_service_price() {
    let app = app().await;
    let response = post(&app, "/services", &json!({ "title": "Free?", "base_price": -1 })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(list(&app, "/services").await.is_empty());
}

// ---------------------------------------------------------------------------
// Service requests
// ---------------------------------------------------------------------------

fn service_request(status: Option<&str>) -> Value {
    let mut body = json!({
        "customer_name": "Ana",
        "customer_email": "ana@example.com",
        "address": "1 Rose Lane",
        "service_title": "Lawn Mowing",
        "preferred_date": "2025-04-01",
    });
    if let Some(status) = status {
        body["status"] = json!(status);
    }
    body
}

#[tokio::test]
async fn should_default_request_status_to_pending() {
    let app = app().await;
    let id = create(&app, "/requests", &service_request(None)).await;

    let items = list(&app, "/requests").await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["status"], "pending");
    assert_eq!(items[0]["preferred_date"], "2025-04-01");
}

#[tokio::test]
async fn should_filter_requests_by_status() {
    let app = app().await;
    for status in [None, Some("completed"), Some("confirmed"), Some("completed")] {
        create(&app, "/requests", &service_request(status)).await;
    }

    let completed = list(&app, "/requests?status=completed").await;
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|item| item["status"] == "completed"));

    assert!(list(&app, "/requests?status=cancelled").await.is_empty());
    assert_eq!(list(&app, "/requests?status=").await.len(), 4);
}

#[tokio::test]
async fn should_return_empty_list_when_no_request_matches() {
    let app = app().await;
    assert!(list(&app, "/requests?status=completed").await.is_empty());
}

#[tokio::test]
async fn should_reject_request_with_invalid_email() {
    let app = app().await;
    let mut body = service_request(None);
    body["customer_email"] = json!("not-an-email");

    let response = post(&app, "/requests", &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["fields"][0]["field"], "customer_email");
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_enforce_review_rating_boundaries() {
    let app = app().await;
    for rating in [0, 6] {
        let response = post(&app, "/reviews", &json!({ "provider_id": "p", "rating": rating })).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "rating {rating}");
    }
    for rating in [1, 5] {
        create(&app, "/reviews", &json!({ "provider_id": "p", "rating": rating })).await;
    }
    assert_eq!(list(&app, "/reviews").await.len(), 2);
}

#[tokio::test]
async fn should_filter_reviews_by_unknown_provider_id() {
    let app = app().await;
    let provider_id = create(&app, "/providers", &json!({ "name": "Real" })).await;
    create(&app, "/reviews", &json!({ "provider_id": provider_id, "rating": 5 })).await;
    create(
        &app,
        "/reviews",
        &json!({ "provider_id": "ghost", "rating": 2, "comment": "never showed up" }),
    )
    .await;

    let ghost = list(&app, "/reviews?provider_id=ghost").await;
    assert_eq!(ghost.len(), 1);
    assert_eq!(ghost[0]["comment"], "never showed up");

    let real = list(&app, &format!("/reviews?provider_id={provider_id}")).await;
    assert_eq!(real.len(), 1);
    assert_eq!(real[0]["rating"], 5);
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_round_trip_every_kind_with_only_id_added() {
    let app = app().await;
    let cases = [
        (
            "/providers",
            json!({
                "name": "P",
                "email": null,
                "phone": null,
                "service_areas": null,
                "rating": 3.5,
                "is_active": false,
            }),
        ),
        (
            "/services",
            json!({
                "title": "S",
                "description": "d",
                "base_price": 10.5,
                "category": "maintenance",
                "duration_estimate_min": 90,
                "is_active": true,
            }),
        ),
        (
            "/requests",
            json!({
                "customer_name": "C",
                "customer_email": "c@example.com",
                "customer_phone": null,
                "address": "A",
                "service_title": "S",
                "preferred_date": "2025-06-30",
                "notes": "gate code 1234",
                "status": "confirmed",
            }),
        ),
        (
            "/reviews",
            json!({
                "provider_id": "p-42",
                "rating": 4,
                "comment": "tidy work",
                "customer_name": null,
            }),
        ),
    ];

    for (uri, input) in cases {
        let id = create(&app, uri, &input).await;

        let items = list(&app, uri).await;
        assert_eq!(items.len(), 1, "{uri}");

        let mut expected = input.clone();
        expected["id"] = json!(id);
        assert_eq!(items[0], expected, "{uri}");
    }
}

#[tokio::test]
async fn should_return_bad_request_for_non_object_body() {
    let app = app().await;
    let response = post(&app, "/providers", &json!(["not", "an", "object"])).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
