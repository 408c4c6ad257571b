//! The push handler
//!
//! Validates an incoming push envelope and answers with a greeting built
//! from the decoded payload. Each request is an independent, stateless
//! transformation; nothing is retained once the response is sent.

use axum::body::Bytes;
use pubsub_envelope::PushEnvelope;

use crate::error::PushError;

/// Handle one Pub/Sub push request.
///
/// The body must be a JSON envelope with a `message` field; anything else
/// is rejected as malformed. A `message` without `data` greets the
/// default target.
pub async fn receive_push(body: Bytes) -> Result<String, PushError> {
    let envelope: PushEnvelope = serde_json::from_slice(&body).map_err(|error| {
        tracing::warn!(%error, "rejecting body that is not a push envelope");
        PushError::MalformedEnvelope
    })?;

    let message = envelope.message.ok_or_else(|| {
        tracing::warn!("rejecting envelope without a message field");
        PushError::MalformedEnvelope
    })?;

    let payload = message.decoded_data().map_err(|error| {
        tracing::warn!(%error, "rejecting message with undecodable data");
        PushError::InvalidPayloadEncoding(error)
    })?;

    let greeting = greeting(payload.as_deref());
    tracing::info!(message_id = ?message.message_id, "{}", greeting);

    Ok(greeting)
}

/// Format the response text: the payload when there is one, `World`
/// otherwise.
fn greeting(payload: Option<&str>) -> String {
    let target = match payload {
        Some(text) if !text.is_empty() => text,
        _ => "World",
    };
    format!("Hello {}!", target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_defaults_to_world() {
        assert_eq!(greeting(None), "Hello World!");
        assert_eq!(greeting(Some("")), "Hello World!");
    }

    #[test]
    fn test_greeting_uses_payload() {
        assert_eq!(greeting(Some("test")), "Hello test!");
        assert_eq!(greeting(Some("Pub/Sub")), "Hello Pub/Sub!");
    }

    #[tokio::test]
    async fn test_receive_push_rejects_empty_body() {
        let result = receive_push(Bytes::new()).await;
        assert!(matches!(result, Err(PushError::MalformedEnvelope)));
    }

    #[tokio::test]
    async fn test_receive_push_rejects_missing_message() {
        let result = receive_push(Bytes::from_static(b"{}")).await;
        assert!(matches!(result, Err(PushError::MalformedEnvelope)));

        let result = receive_push(Bytes::from_static(br#"{"message":null}"#)).await;
        assert!(matches!(result, Err(PushError::MalformedEnvelope)));
    }

    #[tokio::test]
    async fn test_receive_push_greets_decoded_payload() {
        let body = Bytes::from_static(br#"{"message":{"data":"dGVzdA=="}}"#);
        assert_eq!(receive_push(body).await.unwrap(), "Hello test!");
    }

    #[tokio::test]
    async fn test_receive_push_rejects_bad_base64() {
        let body = Bytes::from_static(br#"{"message":{"data":"not base64!"}}"#);
        let result = receive_push(body).await;
        assert!(matches!(result, Err(PushError::InvalidPayloadEncoding(_))));
    }
}
