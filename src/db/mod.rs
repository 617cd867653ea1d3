//! Persistence backends for the asset collection
//!
//! The whole collection is stored as one JSON array under a single fixed
//! slot named [`ASSETS_KEY`]. Every write replaces the full snapshot.
//!
//! - [`Persistence`]: the `save`/`load` contract the store depends on
//! - [`Database`]: sled-backed durable storage
//! - [`MemoryStorage`]: an in-process slot, useful for embedding and tests

use crate::assets::Asset;
use sled::Db;
use std::cell::{Cell, RefCell};
use std::path::Path;

pub mod error;

pub use error::DbError;

/// Name of the slot holding the serialized collection
pub const ASSETS_KEY: &str = "assets";

/// Storage collaborator for the asset store
///
/// `load` returns `Ok(None)` when nothing has been saved yet. A payload that
/// exists but cannot be parsed is reported as [`DbError::Corrupt`]; the store
/// decides how to recover from that.
pub trait Persistence {
    /// Replace the stored snapshot with `assets`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the snapshot cannot be encoded or written.
    fn save(&self, assets: &[Asset]) -> Result<(), DbError>;

    /// Read the stored snapshot
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the backend cannot be read or the payload is corrupt.
    fn load(&self) -> Result<Option<Vec<Asset>>, DbError>;
}

impl<T: Persistence + ?Sized> Persistence for &T {
    fn save(&self, assets: &[Asset]) -> Result<(), DbError> {
        (**self).save(assets)
    }

    fn load(&self) -> Result<Option<Vec<Asset>>, DbError> {
        (**self).load()
    }
}

fn encode(assets: &[Asset]) -> Result<Vec<u8>, DbError> {
    serde_json::to_vec(assets).map_err(DbError::EncodeError)
}

fn decode(bytes: &[u8]) -> Result<Vec<Asset>, DbError> {
    serde_json::from_slice(bytes).map_err(DbError::Corrupt)
}

/// Sled-backed asset storage
///
/// The snapshot lives under [`ASSETS_KEY`] in the default tree and is flushed
/// after every save.
pub struct Database {
    db: Db,
}

impl Database {
    /// Opens or creates a database at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use assetr::db::Database;
    /// let db = Database::open("my_assets").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Whether a snapshot has ever been written
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the lookup fails.
    pub fn has_snapshot(&self) -> Result<bool, DbError> {
        Ok(self.db.contains_key(ASSETS_KEY)?)
    }

    /// Overwrite the raw payload, bypassing encoding
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the write fails.
    pub fn put_raw(&self, payload: &[u8]) -> Result<(), DbError> {
        self.db.insert(ASSETS_KEY, payload)?;
        self.db.flush()?;
        Ok(())
    }
}

impl Persistence for Database {
    fn save(&self, assets: &[Asset]) -> Result<(), DbError> {
        let payload = encode(assets)?;
        self.db.insert(ASSETS_KEY, payload)?;
        self.db.flush()?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Asset>>, DbError> {
        match self.db.get(ASSETS_KEY)? {
            Some(value) => decode(&value).map(Some),
            None => Ok(None),
        }
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Best-effort flush; errors cannot be propagated from Drop.
        let _ = self.db.flush();
    }
}

/// In-memory single-slot storage holding the JSON payload as text
///
/// Behaves like a browser's local storage entry: the payload can be inspected
/// or replaced directly, which makes it easy to simulate corrupt data.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing raw payload
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(payload.into())),
            writes: Cell::new(0),
        }
    }

    /// Current raw payload, if any
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful saves so far
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Persistence for MemoryStorage {
    fn save(&self, assets: &[Asset]) -> Result<(), DbError> {
        let payload = serde_json::to_string(assets).map_err(DbError::EncodeError)?;
        *self.slot.borrow_mut() = Some(payload);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Asset>>, DbError> {
        self.slot
            .borrow()
            .as_deref()
            .map(|payload| decode(payload.as_bytes()))
            .transpose()
    }
}
