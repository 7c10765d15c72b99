//! The editor state container.

use crate::draft::domain::{Draft, DraftCollection, DraftField, DraftId};
use crate::prioritization::{
    domain::{PendingSubmission, SubmissionId, SubmissionResult},
    services::Resolution,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// What the result area of the editor shows.
///
/// Holding a single enum keeps "error" and "result" mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    /// Nothing submitted yet, or a submission has started.
    #[default]
    Idle,
    /// The whole batch failed; carries the top-level error message.
    Failed(String),
    /// The service answered; carries the reconciled result.
    Completed(SubmissionResult),
}

/// Drafts plus submission display state for one editing session.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    drafts: DraftCollection,
    state: SubmissionState,
    resolved_at: Option<DateTime<Utc>>,
    last_resolved: Option<SubmissionId>,
    in_flight: usize,
}

impl EditorSession {
    /// Creates a session with one empty draft and nothing submitted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing collection.
    #[must_use]
    pub fn with_drafts(drafts: DraftCollection) -> Self {
        Self {
            drafts,
            ..Self::default()
        }
    }

    /// Returns the drafts in display order.
    #[must_use]
    pub const fn drafts(&self) -> &DraftCollection {
        &self.drafts
    }

    /// Appends an empty draft.
    pub fn add_draft(&mut self) -> DraftId {
        self.drafts.add_draft()
    }

    /// Removes a draft; unknown identities are ignored.
    pub fn remove_draft(&mut self, id: DraftId) -> Option<Draft> {
        self.drafts.remove_draft(id)
    }

    /// Replaces one field of a draft; unknown identities are ignored.
    pub fn update_field(
        &mut self,
        id: DraftId,
        field: DraftField,
        value: impl Into<String>,
    ) -> bool {
        self.drafts.update_field(id, field, value)
    }

    /// Starts a submission of the current drafts.
    ///
    /// Clears the previous error and result so a retry starts from a clean
    /// display, and snapshots the normalized payloads in collection order.
    pub fn begin_submission(&mut self) -> PendingSubmission {
        self.state = SubmissionState::Idle;
        self.resolved_at = None;
        self.in_flight += 1;
        let pending = PendingSubmission::new(self.drafts.to_payloads());
        debug!(
            submission = %pending.id(),
            in_flight = self.in_flight,
            "submission started"
        );
        pending
    }

    /// Stores the outcome of a submission.
    ///
    /// Outcomes are applied in the order they resolve: the latest call wins,
    /// even when it belongs to a submission that was started earlier than the
    /// one currently displayed.
    pub fn resolve(&mut self, resolution: Resolution) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state = resolution.outcome.map_or_else(
            |err| SubmissionState::Failed(err.to_string()),
            SubmissionState::Completed,
        );
        self.resolved_at = Some(resolution.resolved_at);
        self.last_resolved = Some(resolution.submission);
        debug!(
            submission = %resolution.submission,
            in_flight = self.in_flight,
            "submission resolved"
        );
    }

    /// Returns the current display state.
    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Returns the top-level error, if the last submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message.as_str()),
            SubmissionState::Idle | SubmissionState::Completed(_) => None,
        }
    }

    /// Returns the result of the last successful submission.
    #[must_use]
    pub const fn result(&self) -> Option<&SubmissionResult> {
        match &self.state {
            SubmissionState::Completed(result) => Some(result),
            SubmissionState::Idle | SubmissionState::Failed(_) => None,
        }
    }

    /// Returns when the displayed outcome arrived.
    #[must_use]
    pub const fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Returns the submission whose outcome is displayed.
    #[must_use]
    pub const fn last_resolved(&self) -> Option<SubmissionId> {
        self.last_resolved
    }

    /// Returns how many started submissions have not resolved yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }
}
