use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::errors::AppError;

/// Token presented in a well-formed `Authorization: Bearer <token>` header.
///
/// Inserted into request extensions by [`require_bearer_token`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken(pub String);

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly two space-separated parts, the first being
/// `Bearer` and the second non-empty.
///
/// ```rust
/// use axum_helpers::http::bearer_token;
///
/// assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
/// assert_eq!(bearer_token("Basic abc123"), None);
/// assert_eq!(bearer_token("Bearer a b"), None);
/// ```
pub fn bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Bearer token middleware.
///
/// Checks only the shape of the `Authorization` header; the token itself is
/// not verified. Missing or malformed headers are rejected with `401`.
///
/// # Example
///
/// ```ignore
/// let protected = Router::new()
///     .route("/tasks", get(list))
///     .layer(axum::middleware::from_fn(require_bearer_token));
/// ```
pub async fn require_bearer_token(mut request: Request, next: Next) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Authorization header required".to_string()))?
        .to_str()
        .ok()
        .and_then(bearer_token)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::Unauthorized("Invalid authorization header format".to_string())
        })?;

    request.extensions_mut().insert(BearerToken(token));
    Ok(next.run(request).await)
}
