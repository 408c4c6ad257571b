//! Router construction and transport-level validation
//!
//! Content-type enforcement lives here as middleware so the handler only
//! ever deals with domain validation: an explicitly non-JSON content type
//! is answered with 415 before the handler runs. Requests without a
//! content type fall through; the handler rejects them if the body is not
//! a valid envelope.

use axum::extract::{DefaultBodyLimit, Request};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;

use crate::config::AppConfig;
use crate::push;

/// Create the router for the push endpoint: `POST /` is the only route.
pub fn push_router(config: &AppConfig) -> Router {
    Router::new()
        .route("/", post(push::receive_push))
        .layer(middleware::from_fn(require_json_content_type))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

/// Reject requests that declare a non-JSON content type.
async fn require_json_content_type(request: Request, next: Next) -> Response {
    match request.headers().get(header::CONTENT_TYPE) {
        Some(value) if !is_json_content_type(value) => {
            tracing::debug!(content_type = ?value, "unsupported media type");
            StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response()
        }
        _ => next.run(request).await,
    }
}

/// `application/json` and `application/*+json` count as JSON; parameters
/// such as `charset` and ASCII case are ignored.
fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(content_type) = value.to_str() else {
        return false;
    };
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    media_type == "application/json"
        || (media_type.starts_with("application/") && media_type.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(value: &'static str) -> HeaderValue {
        HeaderValue::from_static(value)
    }

    #[test]
    fn test_json_content_types_accepted() {
        assert!(is_json_content_type(&header("application/json")));
        assert!(is_json_content_type(&header("application/json; charset=utf-8")));
        assert!(is_json_content_type(&header("APPLICATION/JSON")));
        assert!(is_json_content_type(&header("application/cloudevents+json")));
    }

    #[test]
    fn test_non_json_content_types_rejected() {
        assert!(!is_json_content_type(&header("text/html")));
        assert!(!is_json_content_type(&header("text/plain; charset=utf-8")));
        assert!(!is_json_content_type(&header("application/octet-stream")));
        assert!(!is_json_content_type(&header("text/weird+json")));
        assert!(!is_json_content_type(&header("json")));
    }
}
