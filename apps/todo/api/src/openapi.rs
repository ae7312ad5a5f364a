//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "REST API for managing tasks"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(health::health),
    components(schemas(health::HealthResponse)),
    nest(
        (path = "/api/tasks", api = domain_tasks::TasksApiDoc)
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;
