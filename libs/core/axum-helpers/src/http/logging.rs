//! Request/response logging middleware.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::errors::AppError;

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
const REDACTED: &str = "[redacted]";

/// Settings for [`log_requests`].
#[derive(Clone, Debug)]
pub struct RequestLogger {
    /// Largest POST/PUT body that is buffered and logged. Larger bodies are
    /// rejected with `413 Payload Too Large`.
    pub max_body_bytes: usize,
}

impl RequestLogger {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BODY_BYTES)
    }
}

/// Middleware that logs each request and how long it took.
///
/// Logs:
/// - method, path and request headers (`Authorization` and `Cookie` redacted)
/// - the raw body of `POST` and `PUT` requests
/// - the response status and elapsed time
///
/// The body is buffered and handed on unchanged, so downstream handlers read
/// the same bytes.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use axum_helpers::http::{RequestLogger, log_requests};
///
/// let app = Router::new()
///     .route("/", get(handler))
///     .layer(middleware::from_fn_with_state(RequestLogger::default(), log_requests));
/// ```
pub async fn log_requests(
    State(logger): State<RequestLogger>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::info!(
        method = %method,
        path = %path,
        headers = ?redacted_headers(request.headers()),
        "Request started"
    );

    let request = if method == Method::POST || method == Method::PUT {
        match buffer_body(request, logger.max_body_bytes).await {
            Ok(request) => request,
            Err(err) => {
                let response = err.into_response();
                tracing::info!(
                    method = %method,
                    path = %path,
                    status = response.status().as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Request rejected"
                );
                return response;
            }
        }
    } else {
        request
    };

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}

/// Reads the whole body, logs it and puts it back on the request.
async fn buffer_body(request: Request, limit: usize) -> Result<Request, AppError> {
    let (parts, body) = request.into_parts();

    let bytes: Bytes = axum::body::to_bytes(body, limit).await.map_err(|e| {
        let inner = e.into_inner();
        if inner.is::<http_body_util::LengthLimitError>() {
            AppError::PayloadTooLarge(format!("Request body exceeds {limit} bytes"))
        } else {
            AppError::RequestBody(inner.to_string())
        }
    })?;

    tracing::debug!(body = %String::from_utf8_lossy(&bytes), "Request body");

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Header name/value pairs safe to write to logs.
pub fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name == header::AUTHORIZATION || name == header::COOKIE {
                REDACTED.to_string()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}
