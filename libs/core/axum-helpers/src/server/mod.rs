//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the standard middleware stack
//! - Listener binding and graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use axum_helpers::http::RequestLogger;
//! use core_config::server::ServerConfig;
//!
//! let config = ServerConfig::default();
//! let router = create_router::<ApiDoc>(api_routes, RequestLogger::new(config.max_body_bytes), config.request_timeout);
//! create_app(router, &config).await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_app, create_router};
pub use shutdown::shutdown_signal;
