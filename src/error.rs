//! Error types for storage and profile management.

use thiserror::Error;

/// Errors raised while reading or writing the key-value store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage is not available")]
    Unavailable,

    #[error("could not read key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("could not write key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("could not encode record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed record: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unsupported record version {0}")]
    UnsupportedVersion(u32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile name must not be empty")]
    EmptyName,

    #[error("unknown profile id {0}")]
    UnknownProfile(u64),
}
