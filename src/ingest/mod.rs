//! Ingestion pipeline - turning dropped or picked files into assets
//!
//! For each offered file:
//!
//! ```text
//! FileInput ── MIME top-level in {image, audio, video}? ──no──> skipped
//!     │ yes
//!     ▼
//! FileReader::read_as_data_url ──Err──> failed (siblings unaffected)
//!     │ Ok(url)
//!     ▼
//! Asset { fresh id, now, target section } ──> AssetsContext::add
//! ```
//!
//! Reads run concurrently. Each finished read is added to the store in one
//! synchronous step, in completion order, so no add ever straddles an await.

use crate::assets::{Asset, Section};
use crate::db::Persistence;
use crate::store::{AssetsContext, StoreError};
use chrono::Utc;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod input;
pub mod reader;

pub use input::{FileInput, FileSource, guess_mime};
pub use reader::{DataUrlReader, FileReader, ReadError};

/// Why a single file failed to become an asset
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A file that passed the type filter but could not be stored
#[derive(Debug)]
pub struct IngestFailure {
    pub name: String,
    pub error: IngestError,
}

/// Outcome of one ingestion run
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Ids of the assets created, in completion order
    pub added: Vec<String>,
    /// Names of files dropped for having an unsupported type
    pub skipped: Vec<String>,
    /// Files whose read or store step failed
    pub failed: Vec<IngestFailure>,
}

impl IngestReport {
    /// Whether nothing at all was offered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Ingest `files` into `section`
///
/// Unsupported files are skipped without error. A read failure affects only
/// its own file.
pub async fn ingest_files<P, R>(
    assets: &AssetsContext<P>,
    reader: &R,
    files: Vec<FileInput>,
    section: Section,
) -> IngestReport
where
    P: Persistence,
    R: FileReader,
{
    let mut report = IngestReport::default();
    let mut pending = FuturesUnordered::new();

    for file in files {
        let Some(asset_type) = file.asset_type() else {
            debug!(name = %file.name, mime = %file.mime, "Skipping unsupported file");
            report.skipped.push(file.name);
            continue;
        };
        pending.push(async move {
            let result = reader.read_as_data_url(&file).await;
            (file, asset_type, result)
        });
    }

    while let Some((file, asset_type, result)) = pending.next().await {
        let url = match result {
            Ok(url) => url,
            Err(e) => {
                warn!(name = %file.name, error = %e, "Could not read file, skipping");
                report.failed.push(IngestFailure {
                    name: file.name,
                    error: e.into(),
                });
                continue;
            }
        };

        let asset = Asset::new(Uuid::new_v4().to_string(), asset_type, url, file.name, Utc::now(), section);
        let id = asset.id.clone();
        let name = asset.name.clone();
        match assets.add(asset) {
            Ok(()) => report.added.push(id),
            Err(e) => {
                warn!(%name, error = %e, "Could not store ingested asset");
                report.failed.push(IngestFailure { name, error: e.into() });
            }
        }
    }

    report
}
