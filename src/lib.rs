//! Assetr - a two-bucket media asset sorter
//!
//! This library keeps an ordered collection of image, audio and video assets
//! split into a "source" and a "target" section. Assets arrive through an
//! ingestion pipeline fed by file drops or a file picker, move between
//! sections by drag-and-drop, and are persisted as a whole after every change.
//!
//! The pieces, leaf first:
//!
//! - [`assets`]: the asset record and its vocabulary
//! - [`db`]: persistence backends
//! - [`store`]: the authoritative collection and its shared context
//! - [`ingest`]: file inputs, the reader collaborator, the pipeline
//! - [`selection`]: multi/single selection and commit readiness
//! - [`dnd`]: drop routing and drag-over state
//! - [`library`]: everything above assembled for a frontend

use thiserror::Error;

pub mod assets;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod dnd;
pub mod ingest;
pub mod library;
pub mod output;
pub mod selection;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use assets::{Asset, AssetType, Section, TypeFilter};
pub use library::AssetLibrary;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AssetrError {
    /// Database error
    #[error("Database error: {0}")]
    DbError(#[from] db::DbError),
    /// Store contract error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
