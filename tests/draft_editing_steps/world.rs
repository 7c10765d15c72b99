//! Shared world state for draft editing BDD scenarios.

use rstest::fixture;
use taskrank::{draft::domain::DraftId, editor::EditorSession};

/// Scenario world for draft editing behaviour tests.
pub struct EditorWorld {
    pub session: EditorSession,
}

impl EditorWorld {
    /// Creates a world with a fresh editor session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: EditorSession::new(),
        }
    }

    /// Resolves a 1-based display row to the identity of the draft shown there.
    pub fn draft_at(&self, row: usize) -> Result<DraftId, eyre::Report> {
        row.checked_sub(1)
            .and_then(|index| self.session.drafts().ids().get(index).copied())
            .ok_or_else(|| eyre::eyre!("no draft at row {row}"))
    }
}

impl Default for EditorWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EditorWorld {
    EditorWorld::default()
}
