//! API routes module
//!
//! This module defines all HTTP API routes for the Todo API.

pub mod health;

use axum::{middleware, Router};
use axum_helpers::require_bearer_token;
use domain_tasks::{TaskRepository, TaskService};
use tracing::info;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes<R: TaskRepository + 'static>(
    service: TaskService<R>,
    require_bearer: bool,
) -> Router {
    let mut tasks = domain_tasks::router(service);
    if require_bearer {
        tasks = tasks.layer(middleware::from_fn(require_bearer_token));
    }

    Router::new()
        .nest("/tasks", tasks)
        .merge(health::router())
}

/// Log every registered route, method first.
pub fn log_routes(require_bearer: bool) {
    info!(method = "GET", path = "/api/health", "Route registered");

    for (method, path) in domain_tasks::ROUTES {
        let path = match *path {
            "/" => "/api/tasks".to_string(),
            suffix => format!("/api/tasks{}", suffix),
        };
        info!(method, path = %path, bearer_required = require_bearer, "Route registered");
    }

    info!(method = "OPTIONS", path = "/*", "Route registered");
}
