//! Shared world state for batch submission BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskrank::{
    draft::domain::DraftCollection,
    editor::EditorSession,
    prioritization::{adapters::memory::InMemoryPrioritizationService, services::SubmissionService},
};

/// Service type used by the BDD world.
pub type TestSubmissionService = SubmissionService<InMemoryPrioritizationService, DefaultClock>;

/// Scenario world for batch submission behaviour tests.
pub struct SubmissionWorld {
    pub backend: Arc<InMemoryPrioritizationService>,
    pub service: TestSubmissionService,
    pub session: EditorSession,
}

impl SubmissionWorld {
    /// Creates a world with an empty editor and a healthy in-memory service.
    #[must_use]
    pub fn new() -> Self {
        let backend = Arc::new(InMemoryPrioritizationService::new());
        let service = SubmissionService::new(Arc::clone(&backend), Arc::new(DefaultClock));
        Self {
            backend,
            service,
            session: EditorSession::with_drafts(DraftCollection::empty()),
        }
    }
}

impl Default for SubmissionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SubmissionWorld {
    SubmissionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
