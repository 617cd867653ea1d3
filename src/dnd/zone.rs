//! Drag-over highlighting state
//!
//! - [`DropZone`]: per-section `Idle <-> DraggingOver` machine
//! - [`DocumentDragTracker`]: whether files are being dragged anywhere in
//!   the document

/// Visual state of a section's drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneState {
    #[default]
    Idle,
    DraggingOver,
}

/// Drag events delivered to a drop zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneEvent {
    Enter,
    Over,
    Leave,
    Drop,
}

/// Highlight state machine for one drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropZone {
    state: ZoneState,
}

impl DropZone {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ZoneState::Idle,
        }
    }

    /// Apply an event and return the resulting state
    pub const fn handle(&mut self, event: ZoneEvent) -> ZoneState {
        self.state = match event {
            ZoneEvent::Enter | ZoneEvent::Over => ZoneState::DraggingOver,
            ZoneEvent::Leave | ZoneEvent::Drop => ZoneState::Idle,
        };
        self.state
    }

    #[must_use]
    pub const fn state(&self) -> ZoneState {
        self.state
    }

    #[must_use]
    pub fn is_dragging_over(&self) -> bool {
        self.state == ZoneState::DraggingOver
    }
}

/// Drag events observed at document scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentDragEvent {
    /// A drag entered some element; `carries_files` when its payload types include files
    Enter { carries_files: bool },
    /// A drag left some element; `left_document` when the pointer is no longer over the document
    Leave { left_document: bool },
    /// Something was dropped anywhere in the document
    Drop,
}

/// Tracks whether a file drag is in progress anywhere in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentDragTracker {
    files_dragging: bool,
}

impl DocumentDragTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_dragging: false,
        }
    }

    /// Apply an event and return whether files are being dragged afterwards
    ///
    /// Entering with a non-file payload leaves the flag as it was, and leaving
    /// an inner element does not reset it.
    pub const fn handle(&mut self, event: DocumentDragEvent) -> bool {
        match event {
            DocumentDragEvent::Enter { carries_files: true } => self.files_dragging = true,
            DocumentDragEvent::Leave { left_document: true } | DocumentDragEvent::Drop => {
                self.files_dragging = false;
            }
            DocumentDragEvent::Enter { carries_files: false }
            | DocumentDragEvent::Leave { left_document: false } => {}
        }
        self.files_dragging
    }

    #[must_use]
    pub const fn files_dragging(&self) -> bool {
        self.files_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_transitions() {
        let mut zone = DropZone::new();
        assert_eq!(zone.state(), ZoneState::Idle);

        assert_eq!(zone.handle(ZoneEvent::Enter), ZoneState::DraggingOver);
        assert_eq!(zone.handle(ZoneEvent::Over), ZoneState::DraggingOver);
        assert_eq!(zone.handle(ZoneEvent::Leave), ZoneState::Idle);

        zone.handle(ZoneEvent::Over);
        assert!(zone.is_dragging_over());
        assert_eq!(zone.handle(ZoneEvent::Drop), ZoneState::Idle);
    }

    #[test]
    fn test_zone_leave_when_idle() {
        let mut zone = DropZone::new();
        assert_eq!(zone.handle(ZoneEvent::Leave), ZoneState::Idle);
    }

    #[test]
    fn test_document_tracker_file_drag() {
        let mut tracker = DocumentDragTracker::new();
        assert!(tracker.handle(DocumentDragEvent::Enter { carries_files: true }));
        assert!(tracker.handle(DocumentDragEvent::Leave { left_document: false }));
        assert!(!tracker.handle(DocumentDragEvent::Leave { left_document: true }));
    }

    #[test]
    fn test_document_tracker_ignores_non_file_drags() {
        let mut tracker = DocumentDragTracker::new();
        assert!(!tracker.handle(DocumentDragEvent::Enter { carries_files: false }));

        tracker.handle(DocumentDragEvent::Enter { carries_files: true });
        assert!(tracker.handle(DocumentDragEvent::Enter { carries_files: false }));
    }

    #[test]
    fn test_document_tracker_resets_on_drop() {
        let mut tracker = DocumentDragTracker::new();
        tracker.handle(DocumentDragEvent::Enter { carries_files: true });
        assert!(!tracker.handle(DocumentDragEvent::Drop));
        assert!(!tracker.files_dragging());
    }
}
