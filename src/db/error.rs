//! Persistence error types
//!
//! - **`SledError`**: errors from the underlying sled embedded database
//! - **`EncodeError`**: the collection could not be serialized
//! - **`Corrupt`**: the stored payload could not be parsed back into assets
//!
//! None of these are fatal to a running store: write failures leave the
//! in-memory collection authoritative, and a corrupt payload on load is
//! treated as an empty collection.

use thiserror::Error;

/// Persistence-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    SledError(#[from] sled::Error),

    /// The asset collection could not be encoded
    #[error("Error while encoding assets: {0}")]
    EncodeError(#[source] serde_json::Error),

    /// The stored payload is not a valid asset collection
    #[error("Stored assets are corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The backend refused the write for a reason of its own
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
