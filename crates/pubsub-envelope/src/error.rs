//! Error types for payload decoding

use thiserror::Error;

/// Errors that can occur while decoding a message payload
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("data is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
