//! Pub/Sub push endpoint
//!
//! A single-route HTTP service for Pub/Sub push subscriptions: `POST /`
//! receives a push envelope, decodes the optional base64 payload, and
//! answers with a greeting. Requests that are not valid envelopes are
//! rejected with 400; requests with an explicitly non-JSON content type
//! are rejected with 415 before the handler runs.

pub mod config;
pub mod error;
pub mod push;
pub mod routes;

pub use config::AppConfig;
pub use error::PushError;
pub use routes::push_router;
