//! End-to-end tests for the assembled Todo API router
//!
//! These drive the full middleware stack (CORS, logging, timeout, fallback)
//! over the in-memory store.

use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use domain_tasks::{InMemoryTaskRepository, TaskService};
use futures::StreamExt;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::time::Duration;
use todo_api::build_app;
use todo_api::config::{Config, StoreBackend};
use tower::ServiceExt; // For oneshot()

fn app_with(config: &Config) -> Router {
    build_app(TaskService::new(InMemoryTaskRepository::seeded()), config)
}

fn app() -> Router {
    app_with(&Config::default())
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn assert_cors(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization, X-Requested-With"
    );
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(request("GET", "/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_then_update_scenario() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/tasks",
            Some(json!({"title": "Buy milk", "description": "2%", "completed": false})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_cors(&response);
    assert_eq!(response.headers()["content-type"], "application/json");
    let created = json_body(response).await;
    assert_eq!(created["id"], 3);
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let response = app
        .oneshot(request(
            "PUT",
            "/api/tasks/3",
            Some(json!({"title": "Buy milk", "description": "2%", "completed": true})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn test_list_grows_with_each_create() {
    let app = app();

    for n in 0..4 {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/tasks",
                Some(json!({"title": format!("task {n}")})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(request("GET", "/api/tasks", None))
        .await
        .unwrap();
    let tasks = json_body(response).await;
    let ids: Vec<i64> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_error_responses_carry_cors_and_envelope() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request("GET", "/api/tasks/404", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response);
    let body = json_body(response).await;
    assert_eq!(body["code"], 1004);
    assert_eq!(body["error"], "NOT_FOUND");

    let response = app
        .clone()
        .oneshot(request("POST", "/api/tasks", Some(json!({"title": ""}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_cors(&response);

    let response = app
        .oneshot(request("GET", "/nowhere", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_cors(&response);
    assert_eq!(json_body(response).await["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_id_is_route_mismatch() {
    let response = app()
        .oneshot(request("DELETE", "/api/tasks/abc", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_404_for_any_method() {
    for method in ["POST", "PATCH", "GET", "PUT"] {
        let response = app()
            .oneshot(request(method, "/api/tasks/abc", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
        assert_cors(&response);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(json_body(response).await["error"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_unsupported_method_gets_json_405() {
    for (method, path) in [("POST", "/api/tasks/1"), ("PATCH", "/api/tasks/1"), ("PATCH", "/api/tasks")] {
        let response = app()
            .oneshot(request(method, path, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        assert_cors(&response);
        assert_eq!(response.headers()["content-type"], "application/json");
        let body = json_body(response).await;
        assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["code"], 1013);
    }
}

#[tokio::test]
async fn test_preflight_on_any_path() {
    for path in ["/api/tasks", "/api/tasks/1", "/anything/else"] {
        let response = app()
            .oneshot(request("OPTIONS", path, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_cors(&response);
        assert_eq!(response.headers()["access-control-max-age"], "3600");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}

#[tokio::test]
async fn test_bearer_token_required_when_enabled() {
    let config = Config {
        require_bearer_token: true,
        ..Config::default()
    };
    let app = app_with(&config);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/tasks", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_cors(&response);

    let authorized = Request::builder()
        .uri("/api/tasks")
        .header("authorization", "Bearer any-token")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(authorized).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Health stays open
    let response = app
        .oneshot(request("GET", "/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_lists_task_paths() {
    let response = app()
        .oneshot(request("GET", "/api-docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"].get("/api/tasks").is_some());
    assert!(doc["paths"].get("/api/tasks/{id}").is_some());
    assert!(doc["paths"].get("/api/health").is_some());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = Config::default();
    config.server.max_body_bytes = 16;

    let response = app_with(&config)
        .oneshot(request(
            "POST",
            "/api/tasks",
            Some(json!({"title": "a title well past sixteen bytes"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_cors(&response);
}

#[tokio::test]
async fn test_large_body_within_configured_limit_is_accepted() {
    let mut config = Config::default();
    config.server.max_body_bytes = 4 * 1024 * 1024;

    let description = "x".repeat(3 * 1024 * 1024);
    let response = app_with(&config)
        .oneshot(request(
            "POST",
            "/api/tasks",
            Some(json!({"title": "Big", "description": description})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["description"].as_str().unwrap().len(), 3 * 1024 * 1024);
}

#[tokio::test]
async fn test_stalled_body_times_out_with_json_408() {
    let mut config = Config::default();
    config.server.request_timeout = Duration::from_millis(200);

    let chunks = futures::stream::once(async {
        Ok::<_, std::io::Error>(Bytes::from_static(br#"{"title":"#))
    })
    .chain(futures::stream::pending());
    let stalled = Request::post("/api/tasks")
        .header("content-type", "application/json")
        .body(Body::from_stream(chunks))
        .unwrap();

    let response = tokio::time::timeout(Duration::from_secs(3), app_with(&config).oneshot(stalled))
        .await
        .expect("request timeout should fire before the body completes")
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_cors(&response);
    assert_eq!(json_body(response).await["error"], "REQUEST_TIMEOUT");
}

#[tokio::test]
async fn test_postgres_backend_without_database_config_fails() {
    let config = Config {
        store: StoreBackend::Postgres,
        database: None,
        ..Config::default()
    };

    let err = todo_api::run(config).await.unwrap_err();
    assert!(err.to_string().contains("without database config"), "{err}");
}
