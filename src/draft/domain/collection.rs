//! Ordered, mutable collection of drafts.

use super::{Draft, DraftField, DraftId, NormalizedPayload, to_payload};
use tracing::debug;

/// Owns the ordered list of drafts being edited.
///
/// Insertion order is display order; row labels ("Task N") derive from the
/// position, identities never do. Every operation leaves untouched drafts
/// with the same identity and relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftCollection {
    drafts: Vec<Draft>,
}

impl DraftCollection {
    /// Creates a collection holding exactly one empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self {
            drafts: vec![Draft::empty()],
        }
    }

    /// Creates a collection with no drafts.
    #[must_use]
    pub const fn empty() -> Self {
        Self { drafts: Vec::new() }
    }

    /// Appends a new empty draft and returns its identity.
    pub fn add_draft(&mut self) -> DraftId {
        let draft = Draft::empty();
        let id = draft.id();
        self.drafts.push(draft);
        debug!(draft_id = %id, count = self.drafts.len(), "draft added");
        id
    }

    /// Removes the draft with the given identity.
    ///
    /// Returns the removed draft, or `None` when no draft matches; a missing
    /// identity leaves the collection untouched. Removing the last draft
    /// leaves the collection empty.
    pub fn remove_draft(&mut self, id: DraftId) -> Option<Draft> {
        let index = self.drafts.iter().position(|draft| draft.id() == id)?;
        let removed = self.drafts.remove(index);
        debug!(draft_id = %id, count = self.drafts.len(), "draft removed");
        Some(removed)
    }

    /// Replaces one field of the draft with the given identity.
    ///
    /// Returns `false` without changing anything when no draft matches.
    pub fn update_field(
        &mut self,
        id: DraftId,
        field: DraftField,
        value: impl Into<String>,
    ) -> bool {
        let Some(draft) = self.drafts.iter_mut().find(|draft| draft.id() == id) else {
            return false;
        };
        draft.set_field(field, value);
        debug!(draft_id = %id, field = field.as_str(), "draft field updated");
        true
    }

    /// Returns the draft with the given identity.
    #[must_use]
    pub fn get(&self, id: DraftId) -> Option<&Draft> {
        self.drafts.iter().find(|draft| draft.id() == id)
    }

    /// Returns the 1-based display row of the draft ("Task N").
    #[must_use]
    pub fn row_number(&self, id: DraftId) -> Option<usize> {
        self.drafts
            .iter()
            .position(|draft| draft.id() == id)
            .map(|index| index + 1)
    }

    /// Returns the number of drafts.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.drafts.len()
    }

    /// Returns `true` when no drafts remain.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Iterates drafts in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Draft> {
        self.drafts.iter()
    }

    /// Returns the drafts in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Draft] {
        &self.drafts
    }

    /// Returns the identities in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<DraftId> {
        self.drafts.iter().map(Draft::id).collect()
    }

    /// Normalizes every draft, preserving collection order.
    #[must_use]
    pub fn to_payloads(&self) -> Vec<NormalizedPayload> {
        self.drafts.iter().map(to_payload).collect()
    }
}

impl Default for DraftCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a DraftCollection {
    type Item = &'a Draft;
    type IntoIter = std::slice::Iter<'a, Draft>;

    fn into_iter(self) -> Self::IntoIter {
        self.drafts.iter()
    }
}
