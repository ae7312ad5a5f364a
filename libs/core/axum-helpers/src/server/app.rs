use super::shutdown::shutdown_signal;
use crate::errors::handlers::{not_found, request_timed_out};
use crate::http::{RequestLogger, log_requests, permissive_cors};
use axum::{Json, Router, extract::DefaultBodyLimit, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Path the OpenAPI document is served on.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Starts the Axum server with graceful shutdown.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration with host and port
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let router = Router::new();
///     let config = ServerConfig::default();
///     create_app(router, &config).await?;
///     Ok(())
/// }
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("Server stopped");
    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - The OpenAPI document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - A JSON 404 fallback handler
///
/// Middleware, outermost first:
/// 1. Permissive CORS (answers every `OPTIONS` itself)
/// 2. JSON body for timed-out requests
/// 3. Request timeout, which also bounds reading the request body
/// 4. Request/response logging
/// 5. Per-request tracing span
///
/// Axum's default body limit is replaced by the logger's `max_body_bytes`,
/// so the logger alone decides which bodies are too large.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Example
/// ```ignore
/// let api_routes = Router::new()
///     .nest("/tasks", domain_tasks::router(service))
///     .merge(health_routes);
///
/// let router = create_router::<ApiDoc>(
///     api_routes,
///     RequestLogger::new(config.max_body_bytes),
///     config.request_timeout,
/// );
/// ```
pub fn create_router<T>(apis: Router, logger: RequestLogger, request_timeout: Duration) -> Router
where
    T: OpenApi + 'static,
{
    #[allow(deprecated)]
    let timeout_layer = TimeoutLayer::new(request_timeout);

    Router::new()
        .route(OPENAPI_PATH, get(|| async { Json(T::openapi()) }))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(logger.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(middleware::from_fn_with_state(logger, log_requests))
        .layer(timeout_layer)
        .layer(middleware::map_response(request_timed_out))
        .layer(middleware::from_fn(permissive_cors))
}
