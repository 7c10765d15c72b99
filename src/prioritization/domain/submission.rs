//! Submission attempts taken from the editor.

use super::SubmissionId;
use crate::draft::domain::NormalizedPayload;

/// A batch that has been taken from the editor but not yet sent.
///
/// Holds a snapshot of the payloads, so edits made while the request is in
/// flight do not affect it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    id: SubmissionId,
    batch: Vec<NormalizedPayload>,
}

impl PendingSubmission {
    /// Creates a pending submission for the given batch.
    #[must_use]
    pub fn new(batch: Vec<NormalizedPayload>) -> Self {
        Self {
            id: SubmissionId::new(),
            batch,
        }
    }

    /// Returns the submission identifier.
    #[must_use]
    pub const fn id(&self) -> SubmissionId {
        self.id
    }

    /// Returns the payloads in collection order.
    #[must_use]
    pub fn batch(&self) -> &[NormalizedPayload] {
        &self.batch
    }

    /// Consumes the submission, returning its identifier and payloads.
    #[must_use]
    pub fn into_parts(self) -> (SubmissionId, Vec<NormalizedPayload>) {
        (self.id, self.batch)
    }
}
