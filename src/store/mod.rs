//! Authoritative in-memory asset collection
//!
//! [`AssetStore`] owns the ordered list of assets and writes a full snapshot
//! to its [`Persistence`] backend after every mutation call, including calls
//! that turn out to change nothing. Persistence failures
//! are logged and otherwise ignored: the in-memory collection stays correct
//! for the running session, and the next successful write catches the
//! backend up.
//!
//! [`AssetsContext`] is the shared handle every consumer receives by
//! reference. Each operation borrows the store for exactly one synchronous
//! step, so concurrent ingestions interleave only between whole adds.

use crate::assets::{Asset, Section, TypeFilter};
use crate::db::{DbError, Persistence};
use std::cell::RefCell;
use std::collections::HashSet;
use tracing::{debug, warn};

pub mod error;

pub use error::{Result, StoreError};

/// Ordered asset collection backed by a persistence collaborator
pub struct AssetStore<P> {
    assets: Vec<Asset>,
    storage: P,
}

impl<P: Persistence> AssetStore<P> {
    /// Open the store, restoring whatever the backend holds
    ///
    /// A missing snapshot, an unreadable backend, or a corrupt payload all
    /// produce an empty collection. A corrupt payload is overwritten with the
    /// empty snapshot right away. Duplicate ids in a restored snapshot keep
    /// their first occurrence.
    pub fn open(storage: P) -> Self {
        let (assets, corrupt) = match storage.load() {
            Ok(Some(assets)) => (dedupe(assets), false),
            Ok(None) => (Vec::new(), false),
            Err(e @ DbError::Corrupt(_)) => {
                warn!(error = %e, "Stored assets are corrupt, replacing them with an empty collection");
                (Vec::new(), true)
            }
            Err(e) => {
                warn!(error = %e, "Could not restore stored assets, starting empty");
                (Vec::new(), false)
            }
        };
        debug!(count = assets.len(), "Asset store opened");
        let store = Self { assets, storage };
        if corrupt {
            store.persist();
        }
        store
    }

    /// Full collection in insertion order
    #[must_use]
    pub fn list(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Look up an asset by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Assets of one section passing `filter`, in insertion order
    pub fn query(&self, section: Section, filter: TypeFilter) -> impl Iterator<Item = &Asset> {
        self.assets
            .iter()
            .filter(move |asset| asset.section() == section && filter.accepts(asset.asset_type))
    }

    /// Append an asset
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if an asset with the same id exists;
    /// the collection is left untouched.
    pub fn add(&mut self, asset: Asset) -> Result<()> {
        if self.contains(&asset.id) {
            return Err(StoreError::DuplicateId(asset.id));
        }
        debug!(id = %asset.id, name = %asset.name, section = %asset.section(), "Adding asset");
        self.assets.push(asset);
        self.persist();
        Ok(())
    }

    /// Remove an asset; returns `false` if it was absent
    ///
    /// The snapshot is written either way, so a call after a failed write
    /// still brings the backend up to date.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.assets.len();
        self.assets.retain(|asset| asset.id != id);
        let deleted = self.assets.len() != before;
        if deleted {
            debug!(id, "Deleted asset");
        } else {
            debug!(id, "Delete matched no asset");
        }
        self.persist();
        deleted
    }

    /// Reassign an asset's section; returns `false` if the id is unknown
    ///
    /// Like [`delete`](Self::delete), this always writes the snapshot.
    pub fn move_asset(&mut self, id: &str, section: Section) -> bool {
        let found = match self.assets.iter_mut().find(|asset| asset.id == id) {
            Some(asset) => {
                asset.set_section(section);
                debug!(id, %section, "Moved asset");
                true
            }
            None => {
                debug!(id, "Move matched no asset");
                false
            }
        };
        self.persist();
        found
    }

    /// The persistence backend
    #[must_use]
    pub const fn storage(&self) -> &P {
        &self.storage
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.assets) {
            warn!(error = %e, count = self.assets.len(), "Failed to persist assets");
        }
    }
}

fn dedupe(assets: Vec<Asset>) -> Vec<Asset> {
    let mut seen = HashSet::new();
    let total = assets.len();
    let unique: Vec<Asset> = assets
        .into_iter()
        .filter(|asset| seen.insert(asset.id.clone()))
        .collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "Stored assets contained duplicate ids");
    }
    unique
}

/// Shared handle to the asset store
///
/// Consumers take `&AssetsContext` and mutate only through
/// [`add`](Self::add), [`delete`](Self::delete) and
/// [`move_asset`](Self::move_asset). Calling back into the context from
/// inside [`with_store`](Self::with_store) is a contract violation and is
/// reported as [`StoreError::ContextBusy`].
pub struct AssetsContext<P> {
    store: RefCell<AssetStore<P>>,
}

impl<P: Persistence> AssetsContext<P> {
    #[must_use]
    pub fn new(store: AssetStore<P>) -> Self {
        Self {
            store: RefCell::new(store),
        }
    }

    /// Open a store on `storage` and wrap it
    pub fn open(storage: P) -> Self {
        Self::new(AssetStore::open(storage))
    }

    /// Run a read-only closure against the store
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is being mutated.
    pub fn with_store<T>(&self, f: impl FnOnce(&AssetStore<P>) -> T) -> Result<T> {
        let store = self
            .store
            .try_borrow()
            .map_err(|_| StoreError::ContextBusy("read"))?;
        Ok(f(&store))
    }

    /// Clone of the full collection
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is being mutated.
    pub fn assets(&self) -> Result<Vec<Asset>> {
        self.with_store(|store| store.list().to_vec())
    }

    /// Clone of one section's assets under `filter`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is being mutated.
    pub fn query(&self, section: Section, filter: TypeFilter) -> Result<Vec<Asset>> {
        self.with_store(|store| store.query(section, filter).cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` for a repeated id, or
    /// `StoreError::ContextBusy` if the store is borrowed.
    pub fn add(&self, asset: Asset) -> Result<()> {
        self.borrow_mut("add")?.add(asset)
    }

    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is borrowed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.borrow_mut("delete")?.delete(id))
    }

    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is borrowed.
    pub fn move_asset(&self, id: &str, section: Section) -> Result<bool> {
        Ok(self.borrow_mut("move")?.move_asset(id, section))
    }

    fn borrow_mut(&self, operation: &'static str) -> Result<std::cell::RefMut<'_, AssetStore<P>>> {
        self.store
            .try_borrow_mut()
            .map_err(|_| StoreError::ContextBusy(operation))
    }
}
