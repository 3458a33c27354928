//! Error types module
//!
//! Expected "not supported / malformed" conditions in this crate are signalled
//! with `Option::None`, not errors. `AppError` exists for the one place a caller
//! needs to know *why* something failed: decoding a base64 text payload.

use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}
