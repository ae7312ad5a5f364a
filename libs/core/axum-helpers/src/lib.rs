//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, request logging, bearer token check)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (numeric id path)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{RequestLogger, server::{create_app, create_router}};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(
//!         api_routes,
//!         RequestLogger::new(config.max_body_bytes),
//!         config.request_timeout,
//!     );
//!
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{OPENAPI_PATH, create_app, create_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::{
    BearerToken, RequestLogger, bearer_token, log_requests, permissive_cors,
    require_bearer_token,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use errors::handlers::method_not_allowed;

// Re-export extractors
pub use extractors::IdPath;
