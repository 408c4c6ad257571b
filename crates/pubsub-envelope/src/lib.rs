//! Pub/Sub push delivery wire types
//!
//! This crate provides the types a push subscriber needs to read the JSON
//! document Pub/Sub POSTs to its endpoint, along with payload decoding.

pub mod envelope;
pub mod error;

// Re-export key types at crate root
pub use envelope::{PushEnvelope, PushMessage};
pub use error::DecodeError;
