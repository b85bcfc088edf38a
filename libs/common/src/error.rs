//! Custom error types for the common library
//!
//! This module defines the error type returned by every key-value store
//! backend.

use redis::RedisError;
use thiserror::Error;

/// Custom error type for key-value store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error reported by the Redis backend
    #[error("Store backend error: {0}")]
    Backend(#[from] RedisError),

    /// Error reading or writing a blob on disk
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key contains characters the backend cannot address
    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    /// Configuration error
    #[error("Store configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
