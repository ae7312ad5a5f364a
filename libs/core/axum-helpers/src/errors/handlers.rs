use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use super::{AppError, ErrorCode, error_response};

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    error_response(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
        ErrorCode::NotFound,
    )
}

/// Fallback for a matched path that does not accept the request method.
///
/// Register it on each `MethodRouter` with `.fallback(method_not_allowed)`.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    AppError::MethodNotAllowed(format!("{} is not allowed on {}", method, uri.path()))
        .into_response()
}

/// Rewrites the empty `408` produced by `TimeoutLayer` into the JSON error
/// envelope. Use with `axum::middleware::map_response` outside the timeout.
pub async fn request_timed_out(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    tracing::warn!("Request timed out");
    AppError::RequestTimeout(ErrorCode::RequestTimeout.default_message().to_string())
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_bare_timeout_becomes_json_envelope() {
        let bare = StatusCode::REQUEST_TIMEOUT.into_response();
        let response = request_timed_out(bare).await;

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "REQUEST_TIMEOUT");
        assert_eq!(json["code"], 1011);
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let ok = Response::new(Body::from("fine"));
        let response = request_timed_out(ok).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"fine");
    }
}
