//! Push envelope representation
//!
//! Pub/Sub push delivery wraps every message in a JSON envelope and POSTs
//! it to the subscriber's endpoint. The envelope looks like:
//!
//! ```json
//! {
//!   "message": {
//!     "data": "dGVzdA==",
//!     "attributes": {},
//!     "messageId": "91010751788941",
//!     "publishTime": "2017-09-25T23:16:42.302Z"
//!   },
//!   "subscription": "projects/my-project/subscriptions/my-sub"
//! }
//! ```
//!
//! `data` is the published payload, base64-encoded with the standard
//! alphabet. Everything else is delivery metadata.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::error::DecodeError;

/// The JSON document Pub/Sub push delivery POSTs to a subscriber endpoint.
///
/// Unknown fields are ignored so that additions to the push format (for
/// example `deliveryAttempt`) do not break deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PushEnvelope {
    /// The wrapped message. Absent or null on malformed envelopes.
    #[serde(default)]
    pub message: Option<PushMessage>,

    /// Full resource name of the subscription that delivered the message.
    #[serde(default)]
    pub subscription: Option<String>,
}

/// A single Pub/Sub message as carried inside a push envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushMessage {
    /// Base64-encoded application payload.
    #[serde(default)]
    pub data: Option<String>,

    /// Publisher-set key/value metadata.
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    /// Server-assigned identifier, unique within the topic.
    #[serde(default)]
    pub message_id: Option<String>,

    /// RFC 3339 timestamp assigned when the message was published.
    #[serde(default)]
    pub publish_time: Option<String>,
}

impl PushMessage {
    /// Decode the base64 `data` field into UTF-8 text.
    ///
    /// Returns `Ok(None)` when the message carries no payload. Fails when
    /// the field is not valid base64 (standard alphabet) or the decoded
    /// bytes are not valid UTF-8.
    pub fn decoded_data(&self) -> Result<Option<String>, DecodeError> {
        let Some(encoded) = &self.data else {
            return Ok(None);
        };
        let bytes = STANDARD.decode(encoded)?;
        Ok(Some(String::from_utf8(bytes)?))
    }
}
