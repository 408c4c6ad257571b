//! Error types for the push endpoint

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pubsub_envelope::DecodeError;
use thiserror::Error;

/// Errors a push request can fail with.
///
/// Both kinds surface as a 400 response whose body is the error's display
/// text. An unsupported content type never reaches this taxonomy; the
/// router's media-type gate answers 415 before the handler runs.
#[derive(Error, Debug)]
pub enum PushError {
    /// The request body is empty, not JSON, or lacks a `message` field.
    #[error("Bad Request: invalid Pub/Sub message format")]
    MalformedEnvelope,

    /// `message.data` is present but cannot be decoded into text.
    #[error("Bad Request: invalid Pub/Sub message payload")]
    InvalidPayloadEncoding(#[from] DecodeError),
}

impl PushError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            PushError::MalformedEnvelope => StatusCode::BAD_REQUEST,
            PushError::InvalidPayloadEncoding(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for PushError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
