//! Application state for a two-section asset library
//!
//! [`AssetLibrary`] is what a frontend binds to. It owns the shared
//! [`AssetsContext`], the file reader, the selection controller, one
//! [`SectionView`] per section (type filter plus drop-zone highlight), and
//! the document-wide file-drag tracker.
//!
//! # Event flow
//!
//! ```text
//! drag enter/over/leave  → drag_event(section, ..)       → zone highlight
//! drop                   → handle_drop(section, payload) → move or ingest
//! file picker            → handle_upload(section, files) → ingest
//! click asset            → click_asset(section, id)      → selection
//! delete button          → delete_asset(id)              → store + selection
//! save / cancel          → save() / cancel()             → selection cleared
//! ```

use crate::assets::{Asset, Section, TypeFilter};
use crate::db::Persistence;
use crate::dnd::{
    DocumentDragEvent, DocumentDragTracker, DropOutcome, DropZone, TransferPayload, ZoneEvent, ZoneState,
    route_drop, route_upload,
};
use crate::ingest::{FileInput, FileReader, IngestReport};
use crate::selection::{Commit, SelectionController};
use crate::store::{AssetsContext, Result};
use std::cell::{Cell, RefCell};

/// Display state of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionView {
    pub section: Section,
    pub filter: TypeFilter,
    pub zone: DropZone,
}

impl SectionView {
    #[must_use]
    pub const fn new(section: Section) -> Self {
        Self {
            section,
            filter: TypeFilter::All,
            zone: DropZone::new(),
        }
    }
}

/// Frontend-facing library state
///
/// Every handler takes `&self`, so a drop whose files are still being read
/// does not block clicks, drag events or further drops on the same task.
/// Interior borrows are confined to single synchronous steps and never held
/// across an await.
pub struct AssetLibrary<P, R> {
    assets: AssetsContext<P>,
    reader: R,
    selection: RefCell<SelectionController>,
    source: Cell<SectionView>,
    target: Cell<SectionView>,
    document_drag: Cell<DocumentDragTracker>,
}

impl<P: Persistence, R: FileReader> AssetLibrary<P, R> {
    /// Open the library on `storage`, restoring persisted assets
    pub fn open(storage: P, reader: R) -> Self {
        Self::with_context(AssetsContext::open(storage), reader)
    }

    #[must_use]
    pub const fn with_context(assets: AssetsContext<P>, reader: R) -> Self {
        Self {
            assets,
            reader,
            selection: RefCell::new(SelectionController::new()),
            source: Cell::new(SectionView::new(Section::Source)),
            target: Cell::new(SectionView::new(Section::Target)),
            document_drag: Cell::new(DocumentDragTracker::new()),
        }
    }

    /// The shared store handle
    #[must_use]
    pub const fn context(&self) -> &AssetsContext<P> {
        &self.assets
    }

    /// Current display state of `section`
    #[must_use]
    pub fn view(&self, section: Section) -> SectionView {
        self.view_cell(section).get()
    }

    const fn view_cell(&self, section: Section) -> &Cell<SectionView> {
        match section {
            Section::Source => &self.source,
            Section::Target => &self.target,
        }
    }

    fn update_view<T>(&self, section: Section, f: impl FnOnce(&mut SectionView) -> T) -> T {
        let cell = self.view_cell(section);
        let mut view = cell.get();
        let result = f(&mut view);
        cell.set(view);
        result
    }

    fn update_selection<T>(&self, f: impl FnOnce(&mut SelectionController) -> T) -> T {
        f(&mut *self.selection.borrow_mut())
    }

    /// Assets shown in `section` under its current filter
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is borrowed.
    pub fn assets(&self, section: Section) -> Result<Vec<Asset>> {
        self.assets.query(section, self.view(section).filter)
    }

    pub fn set_filter(&self, section: Section, filter: TypeFilter) {
        self.update_view(section, |view| view.filter = filter);
    }

    /// Feed a drag event to a section's drop zone
    pub fn drag_event(&self, section: Section, event: ZoneEvent) -> ZoneState {
        self.update_view(section, |view| view.zone.handle(event))
    }

    /// Feed a document-scoped drag event
    pub fn document_event(&self, event: DocumentDragEvent) -> bool {
        let mut tracker = self.document_drag.get();
        let dragging = tracker.handle(event);
        self.document_drag.set(tracker);
        dragging
    }

    /// Whether files are being dragged anywhere in the document
    #[must_use]
    pub fn files_dragging(&self) -> bool {
        self.document_drag.get().files_dragging()
    }

    /// Handle a drop on `section`
    ///
    /// Resets the section's highlight and the document tracker on the first
    /// poll, then routes the payload. A moved asset is removed from any
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is borrowed.
    pub async fn handle_drop(&self, section: Section, payload: TransferPayload) -> Result<DropOutcome> {
        self.drag_event(section, ZoneEvent::Drop);
        self.document_event(DocumentDragEvent::Drop);

        let outcome = route_drop(&self.assets, &self.reader, payload, section).await?;
        if let DropOutcome::Moved { asset_id, found: true } = &outcome {
            self.update_selection(|selection| selection.forget(asset_id));
        }
        Ok(outcome)
    }

    /// Handle a file-picker change on `section`
    pub async fn handle_upload(&self, section: Section, files: Vec<FileInput>) -> IngestReport {
        route_upload(&self.assets, &self.reader, files, section).await
    }

    /// Apply a click on an asset shown in `section`
    pub fn click_asset(&self, section: Section, id: &str) -> bool {
        self.update_selection(|selection| selection.select(section, id))
    }

    /// Snapshot of both selections
    #[must_use]
    pub fn selection(&self) -> SelectionController {
        self.selection.borrow().clone()
    }

    /// Delete an asset and drop it from any selection
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is borrowed.
    pub fn delete_asset(&self, id: &str) -> Result<bool> {
        let deleted = self.assets.delete(id)?;
        if deleted {
            self.update_selection(|selection| selection.forget(id));
        }
        Ok(deleted)
    }

    /// Move an asset explicitly, outside of a drag
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContextBusy` if the store is borrowed.
    pub fn move_asset(&self, id: &str, section: Section) -> Result<bool> {
        let moved = self.assets.move_asset(id, section)?;
        if moved {
            self.update_selection(|selection| selection.forget(id));
        }
        Ok(moved)
    }

    /// Whether save/cancel should be offered
    #[must_use]
    pub fn is_commit_ready(&self) -> bool {
        self.selection.borrow().is_commit_ready()
    }

    pub fn save(&self) -> Option<Commit> {
        self.update_selection(SelectionController::save)
    }

    pub fn cancel(&self) {
        self.update_selection(SelectionController::cancel);
    }
}
