//! Drag-and-drop routing
//!
//! A drop onto a section carries either an asset id (a drag that started on
//! an existing asset card) or a list of external files. Both end up in the
//! same store, through different operations:
//!
//! ```text
//! drop on section S
//!     ├─ text payload "id"  → AssetsContext::move_asset(id, S)   (files ignored)
//!     ├─ files              → ingest_files(files, S)
//!     └─ neither            → nothing
//! ```
//!
//! File-picker changes go through the same router with no text payload.

use crate::assets::Section;
use crate::db::Persistence;
use crate::ingest::{FileInput, FileReader, IngestReport, ingest_files};
use crate::store::{AssetsContext, Result};
use tracing::debug;

pub mod zone;

pub use zone::{DocumentDragEvent, DocumentDragTracker, DropZone, ZoneEvent, ZoneState};

/// Data carried by a drop or file-picker event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferPayload {
    /// Plain-text field; holds an asset id when the drag started on an asset
    pub text: Option<String>,
    pub files: Vec<FileInput>,
}

impl TransferPayload {
    /// Payload of a drag that started on an existing asset
    #[must_use]
    pub fn asset(id: impl Into<String>) -> Self {
        Self {
            text: Some(id.into()),
            files: Vec::new(),
        }
    }

    /// Payload of an external file drop or a file-picker change
    #[must_use]
    pub const fn files(files: Vec<FileInput>) -> Self {
        Self { text: None, files }
    }

    /// The dragged asset id, if the text field holds a non-empty value
    #[must_use]
    pub fn dragged_asset(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Where a drop is headed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRoute {
    /// Reassign an existing asset
    Move(String),
    /// Ingest external files
    Ingest(Vec<FileInput>),
    /// Nothing usable was dropped
    Ignore,
}

impl DropRoute {
    /// Decide what a payload means
    #[must_use]
    pub fn classify(payload: TransferPayload) -> Self {
        if let Some(id) = payload.dragged_asset() {
            return Self::Move(id.to_string());
        }
        if payload.files.is_empty() {
            Self::Ignore
        } else {
            Self::Ingest(payload.files)
        }
    }
}

/// What a routed drop did
#[derive(Debug)]
pub enum DropOutcome {
    /// An existing asset was targeted; `found` is false when the id was unknown
    Moved { asset_id: String, found: bool },
    Ingested(IngestReport),
    Ignored,
}

/// Route a drop on `section`
///
/// # Errors
///
/// Returns `StoreError::ContextBusy` if the move branch finds the store
/// borrowed. Per-file ingestion problems are reported in the
/// [`IngestReport`] instead.
pub async fn route_drop<P, R>(
    assets: &AssetsContext<P>,
    reader: &R,
    payload: TransferPayload,
    section: Section,
) -> Result<DropOutcome>
where
    P: Persistence,
    R: FileReader,
{
    match DropRoute::classify(payload) {
        DropRoute::Move(asset_id) => {
            let found = assets.move_asset(&asset_id, section)?;
            debug!(%asset_id, %section, found, "Routed drop as move");
            Ok(DropOutcome::Moved { asset_id, found })
        }
        DropRoute::Ingest(files) => {
            debug!(count = files.len(), %section, "Routed drop as ingestion");
            Ok(DropOutcome::Ingested(ingest_files(assets, reader, files, section).await))
        }
        DropRoute::Ignore => Ok(DropOutcome::Ignored),
    }
}

/// Route a file-picker change on `section`
///
/// Always takes the ingestion branch.
pub async fn route_upload<P, R>(
    assets: &AssetsContext<P>,
    reader: &R,
    files: Vec<FileInput>,
    section: Section,
) -> IngestReport
where
    P: Persistence,
    R: FileReader,
{
    ingest_files(assets, reader, files, section).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetType, TypeFilter};
    use crate::db::MemoryStorage;
    use crate::testing::{StaticReader, sample_asset};

    #[test]
    fn test_classify_prefers_asset_id() {
        let payload = TransferPayload {
            text: Some("abc".to_string()),
            files: vec![FileInput::from_bytes("a.png", "image/png", vec![])],
        };
        assert_eq!(DropRoute::classify(payload), DropRoute::Move("abc".to_string()));
    }

    #[test]
    fn test_classify_empty_text_falls_through_to_files() {
        let files = vec![FileInput::from_bytes("a.png", "image/png", vec![])];
        let payload = TransferPayload {
            text: Some(String::new()),
            files: files.clone(),
        };
        assert_eq!(DropRoute::classify(payload), DropRoute::Ingest(files));
    }

    #[test]
    fn test_classify_nothing() {
        assert_eq!(DropRoute::classify(TransferPayload::default()), DropRoute::Ignore);
    }

    #[tokio::test]
    async fn test_drop_existing_asset_moves_it() {
        let ctx = AssetsContext::open(MemoryStorage::new());
        ctx.add(sample_asset("X", AssetType::Image, Section::Source)).unwrap();

        let outcome = route_drop(&ctx, &StaticReader::new(), TransferPayload::asset("X"), Section::Target)
            .await
            .unwrap();

        assert!(matches!(outcome, DropOutcome::Moved { found: true, .. }));
        let all = ctx.assets().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].section(), Section::Target);
    }

    #[tokio::test]
    async fn test_drop_asset_id_ignores_files() {
        let ctx = AssetsContext::open(MemoryStorage::new());
        ctx.add(sample_asset("X", AssetType::Image, Section::Source)).unwrap();
        let reader = StaticReader::new();
        let payload = TransferPayload {
            text: Some("X".to_string()),
            files: vec![FileInput::from_bytes("new.png", "image/png", vec![])],
        };

        route_drop(&ctx, &reader, payload, Section::Target).await.unwrap();

        assert_eq!(ctx.assets().unwrap().len(), 1);
        assert_eq!(reader.calls(), 0);
    }

    #[tokio::test]
    async fn test_drop_unknown_id_is_noop() {
        let ctx = AssetsContext::open(MemoryStorage::new());
        let outcome = route_drop(&ctx, &StaticReader::new(), TransferPayload::asset("ghost"), Section::Target)
            .await
            .unwrap();

        assert!(matches!(outcome, DropOutcome::Moved { found: false, .. }));
        assert!(ctx.assets().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_drop_mixed_files() {
        let ctx = AssetsContext::open(MemoryStorage::new());
        let payload = TransferPayload::files(vec![
            FileInput::from_bytes("a.png", "image/png", vec![1]),
            FileInput::from_bytes("b.txt", "text/plain", vec![2]),
        ]);

        let outcome = route_drop(&ctx, &StaticReader::new(), payload, Section::Target).await.unwrap();

        let DropOutcome::Ingested(report) = outcome else {
            panic!("expected ingestion");
        };
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.skipped, ["b.txt"]);
        let target = ctx.query(Section::Target, TypeFilter::All).unwrap();
        assert_eq!(target.len(), 1);
        assert_eq!(target[0].name, "a.png");
        assert_eq!(target[0].asset_type, AssetType::Image);
    }

    #[tokio::test]
    async fn test_empty_drop_ignored() {
        let ctx = AssetsContext::open(MemoryStorage::new());
        let outcome = route_drop(&ctx, &StaticReader::new(), TransferPayload::default(), Section::Source)
            .await
            .unwrap();
        assert!(matches!(outcome, DropOutcome::Ignored));
    }

    #[tokio::test]
    async fn test_upload_always_ingests() {
        let ctx = AssetsContext::open(MemoryStorage::new());
        let files = vec![FileInput::from_bytes("song.mp3", "audio/mpeg", vec![])];

        let report = route_upload(&ctx, &StaticReader::new(), files, Section::Source).await;

        assert_eq!(report.added.len(), 1);
        assert_eq!(ctx.query(Section::Source, TypeFilter::Only(AssetType::Audio)).unwrap().len(), 1);
    }
}
