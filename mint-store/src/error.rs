//! Store Error Types
//!
//! Error definitions for content store operations.

use thiserror::Error;

/// Content store error
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not reach the store API
    #[error("Store connection failed: {0}")]
    Connection(String),

    /// Request sent but the store rejected it
    #[error("Store request failed: status {status} - {message}")]
    Rejected { status: u16, message: String },

    /// Response did not match the expected shape
    #[error("Unexpected store response: {0}")]
    InvalidResponse(String),

    /// Payload could not be serialized for upload
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Refusing to upload an empty payload
    #[error("Refusing to upload empty payload")]
    EmptyPayload,
}

/// Content store result type
pub type StoreResult<T> = Result<T, StoreError>;

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            StoreError::Connection(e.to_string())
        } else {
            StoreError::InvalidResponse(e.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
