//! Testing utilities for assetr
//!
//! Test doubles for the two external collaborators plus a few fixtures:
//!
//! - [`FailingStorage`]: persistence whose writes and reads can be made to fail
//! - [`StaticReader`]: a file reader with scripted failures and delays
//! - [`TestDb`]: a sled database in a temporary directory
//!
//! Only available when compiled with `cfg(test)`.

use crate::assets::{Asset, AssetType, Section};
use crate::db::{Database, DbError, MemoryStorage, Persistence};
use crate::ingest::{FileInput, FileReader, ReadError};
use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::collections::HashMap;
use tempfile::TempDir;

/// Build an asset with a fixed timestamp and a placeholder URL
#[must_use]
pub fn sample_asset(id: &str, asset_type: AssetType, section: Section) -> Asset {
    let created = DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc);
    let ext = match asset_type {
        AssetType::Image => "png",
        AssetType::Audio => "mp3",
        AssetType::Video => "mp4",
    };
    Asset::new(id, asset_type, format!("data:{asset_type}/{ext};base64,AA=="), format!("{id}.{ext}"), created, section)
}

/// Persistence that fails while `failing` is set
///
/// Successful writes land in an inner [`MemoryStorage`], so a test can flip
/// the switch off and observe recovery.
#[derive(Debug)]
pub struct FailingStorage {
    inner: MemoryStorage,
    failing: Cell<bool>,
    attempts: Cell<usize>,
}

impl FailingStorage {
    /// Create storage that starts out failing
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: MemoryStorage::new(),
            failing: Cell::new(true),
            attempts: Cell::new(0),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Number of save calls, successful or not
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl Persistence for FailingStorage {
    fn save(&self, assets: &[Asset]) -> Result<(), DbError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.failing.get() {
            return Err(DbError::Unavailable("simulated write failure".to_string()));
        }
        self.inner.save(assets)
    }

    fn load(&self) -> Result<Option<Vec<Asset>>, DbError> {
        if self.failing.get() {
            return Err(DbError::Unavailable("simulated read failure".to_string()));
        }
        self.inner.load()
    }
}

/// Reader returning `data:<mime>;base64,<name>` without touching the bytes
#[derive(Debug, Default)]
pub struct StaticReader {
    failing: Vec<String>,
    delays: HashMap<String, usize>,
    calls: Cell<usize>,
}

impl StaticReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject reads of the file with this name
    #[must_use]
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    /// Yield `polls` times before finishing the read of this file
    #[must_use]
    pub fn delayed(mut self, name: &str, polls: usize) -> Self {
        self.delays.insert(name.to_string(), polls);
        self
    }

    /// Number of reads started
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl FileReader for StaticReader {
    async fn read_as_data_url(&self, file: &FileInput) -> Result<String, ReadError> {
        self.calls.set(self.calls.get() + 1);
        let polls = self.delays.get(&file.name).copied().unwrap_or(0);
        for _ in 0..polls {
            tokio::task::yield_now().await;
        }
        if self.failing.contains(&file.name) {
            return Err(ReadError::Rejected(file.name.clone()));
        }
        Ok(format!("data:{};base64,{}", file.mime, file.name))
    }
}

/// Wrapper for a sled database living in a temporary directory
///
/// The directory is removed when the wrapper is dropped.
pub struct TestDb {
    // Field order matters: the database must close before its directory goes.
    db: Database,
    dir: TempDir,
}

impl TestDb {
    /// # Panics
    /// Panics if the temporary directory or database cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db = Database::open(dir.path().join("assets.db")).expect("Failed to open test database");
        Self { db, dir }
    }

    #[must_use]
    pub const fn db(&self) -> &Database {
        &self.db
    }

    /// Reopen the same on-disk database under a new handle
    ///
    /// # Panics
    /// Panics if the database cannot be reopened.
    #[must_use]
    pub fn reopen(self) -> Self {
        let Self { db, dir } = self;
        drop(db);
        let db = Database::open(dir.path().join("assets.db")).expect("Failed to reopen test database");
        Self { db, dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AssetStore;

    #[test]
    fn test_db_persists_across_reopen() {
        let test_db = TestDb::new();
        {
            let mut store = AssetStore::open(test_db.db());
            store.add(sample_asset("kept", AssetType::Video, Section::Target)).unwrap();
        }

        let test_db = test_db.reopen();
        let store = AssetStore::open(test_db.db());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("kept").unwrap().section(), Section::Target);
    }

    #[test]
    fn test_failing_storage_counts_attempts() {
        let storage = FailingStorage::new();
        assert!(storage.save(&[]).is_err());
        storage.set_failing(false);
        assert!(storage.save(&[]).is_ok());
        assert_eq!(storage.attempts(), 2);
    }

    #[tokio::test]
    async fn test_static_reader() {
        let reader = StaticReader::new().failing_on("bad.png");
        let good = FileInput::from_bytes("good.png", "image/png", vec![]);
        let bad = FileInput::from_bytes("bad.png", "image/png", vec![]);

        assert_eq!(reader.read_as_data_url(&good).await.unwrap(), "data:image/png;base64,good.png");
        assert!(reader.read_as_data_url(&bad).await.is_err());
        assert_eq!(reader.calls(), 2);
    }
}
