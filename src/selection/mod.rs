//! Per-section asset selection
//!
//! One [`Selection`] type covers both disciplines the library needs:
//!
//! - **Multi**: clicking toggles membership, no upper bound
//! - **Single**: clicking the selected id clears it, clicking another id
//!   replaces it
//!
//! [`SelectionController`] pairs a multi-select source selection with a
//! single-select target selection and decides when a commit is possible.
//! Selection state is never persisted.

use crate::assets::Section;

/// How clicks on assets change a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Multi,
    Single,
}

/// Selected asset ids of one section, in click order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    discipline: Discipline,
    ids: Vec<String>,
}

impl Selection {
    #[must_use]
    pub const fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            ids: Vec::new(),
        }
    }

    /// Apply a click on `id`
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            return false;
        }
        if self.discipline == Discipline::Single {
            self.ids.clear();
        }
        self.ids.push(id.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Selected ids in click order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The selected id under the single discipline
    #[must_use]
    pub fn single(&self) -> Option<&str> {
        match self.discipline {
            Discipline::Single => self.ids.first().map(String::as_str),
            Discipline::Multi => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Drop `id` if selected; returns whether it was
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Snapshot of a commit-ready selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Selected source ids, in click order
    pub sources: Vec<String>,
    /// The selected target id
    pub target: String,
}

/// Selections for both sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    source: Selection,
    target: Selection,
}

impl SelectionController {
    /// Multi-select source, single-select target
    #[must_use]
    pub const fn new() -> Self {
        Self::with_disciplines(Discipline::Multi, Discipline::Single)
    }

    #[must_use]
    pub const fn with_disciplines(source: Discipline, target: Discipline) -> Self {
        Self {
            source: Selection::new(source),
            target: Selection::new(target),
        }
    }

    /// Apply a click on an asset rendered in `section`
    pub fn select(&mut self, section: Section, id: &str) -> bool {
        self.selection_mut(section).toggle(id)
    }

    #[must_use]
    pub const fn selection(&self, section: Section) -> &Selection {
        match section {
            Section::Source => &self.source,
            Section::Target => &self.target,
        }
    }

    fn selection_mut(&mut self, section: Section) -> &mut Selection {
        match section {
            Section::Source => &mut self.source,
            Section::Target => &mut self.target,
        }
    }

    /// Source selection non-empty and a target chosen
    #[must_use]
    pub fn is_commit_ready(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }

    /// Clear both selections, returning what was committed
    ///
    /// Nothing beyond clearing happens yet; the snapshot lets the caller act
    /// on the pairing. Returns `None` when the selection was not commit-ready.
    pub fn save(&mut self) -> Option<Commit> {
        let commit = if self.is_commit_ready() {
            self.target.ids().first().map(|target| Commit {
                sources: self.source.ids().to_vec(),
                target: target.clone(),
            })
        } else {
            None
        };
        self.cancel();
        commit
    }

    /// Clear both selections
    pub fn cancel(&mut self) {
        self.source.clear();
        self.target.clear();
    }

    /// Remove `id` from both selections
    pub fn forget(&mut self, id: &str) {
        self.source.remove(id);
        self.target.remove(id);
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}
