//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - Permissive CORS headers and preflight answers
//! - Request/response logging
//! - Bearer token shape checks
//!
//! # Example
//!
//! ```ignore
//! use axum::middleware;
//! use axum_helpers::http::{RequestLogger, log_requests, permissive_cors};
//!
//! let app = Router::new()
//!     .layer(middleware::from_fn_with_state(RequestLogger::default(), log_requests))
//!     .layer(middleware::from_fn(permissive_cors));
//! ```

pub mod auth;
pub mod cors;
pub mod logging;

pub use auth::{BearerToken, bearer_token, require_bearer_token};
pub use cors::permissive_cors;
pub use logging::{RequestLogger, log_requests};
