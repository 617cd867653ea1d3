//! Store error types

use thiserror::Error;

/// Errors returned by store and context operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An asset with this id is already in the collection
    #[error("Asset id already present: {0}")]
    DuplicateId(String),

    /// The store was mutated while another operation still borrowed it
    #[error("Asset store is busy: {0} attempted during another store operation")]
    ContextBusy(&'static str),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
