//! Service layer for batch submission and response reconciliation.

use super::interpret_response;
use crate::draft::domain::DraftCollection;
use crate::editor::EditorSession;
use crate::prioritization::{
    domain::{
        HealthStatus, PendingSubmission, SubmissionId, SubmissionResult, TaskListing,
        ValidationReport,
    },
    ports::{PrioritizationService, TransportError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Whole-batch failures of a submission.
///
/// Per-task validation failures are not errors; they arrive as
/// [`SubmissionResult::invalid`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, or a generic one naming the status.
        message: String,
    },
    /// The service answered with success but the body did not decode.
    #[error("malformed response from prioritization service: {0}")]
    MalformedResponse(String),
}

impl SubmissionError {
    /// Builds a rejection, falling back to a generic message naming the
    /// status when the service did not supply one.
    #[must_use]
    pub fn rejected(status: u16, server_message: Option<String>) -> Self {
        let message = server_message.unwrap_or_else(|| format!("Error {status}"));
        Self::Rejected { status, message }
    }

    /// Returns the HTTP status for rejections.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::MalformedResponse(_) => None,
        }
    }
}

/// Outcome of one submission: the reconciled result or a whole-batch error.
pub type SubmissionOutcome = Result<SubmissionResult, SubmissionError>;

/// The settled outcome of one dispatched submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Submission this outcome belongs to.
    pub submission: SubmissionId,
    /// When the outcome arrived.
    pub resolved_at: DateTime<Utc>,
    /// Reconciled result or whole-batch failure.
    pub outcome: SubmissionOutcome,
}

/// Submission orchestration service.
#[derive(Clone)]
pub struct SubmissionService<S, C>
where
    S: PrioritizationService,
    C: Clock + Send + Sync,
{
    service: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> SubmissionService<S, C>
where
    S: PrioritizationService,
    C: Clock + Send + Sync,
{
    /// Creates a new submission service.
    #[must_use]
    pub const fn new(service: Arc<S>, clock: Arc<C>) -> Self {
        Self { service, clock }
    }

    /// Normalizes every draft, sends the batch in one request and reconciles
    /// the response.
    pub async fn submit(&self, drafts: &DraftCollection) -> SubmissionOutcome {
        self.dispatch(PendingSubmission::new(drafts.to_payloads()))
            .await
            .outcome
    }

    /// Sends a pending submission and stamps the outcome with its arrival
    /// time.
    pub async fn dispatch(&self, pending: PendingSubmission) -> Resolution {
        let (submission, batch) = pending.into_parts();
        info!(%submission, tasks = batch.len(), "submitting batch for prioritization");

        let outcome = self
            .service
            .prioritize(batch)
            .await
            .map_err(SubmissionError::from)
            .and_then(|response| interpret_response::<SubmissionResult>(&response));

        match &outcome {
            Ok(result) => info!(
                %submission,
                prioritized = result.prioritized.len(),
                invalid = result.invalid.len(),
                "batch prioritized"
            ),
            Err(err) => warn!(
                %submission,
                status = ?err.status(),
                error = %err,
                "batch submission failed"
            ),
        }

        Resolution {
            submission,
            resolved_at: self.clock.utc(),
            outcome,
        }
    }

    /// Runs one full submission for an editor session.
    ///
    /// Clears the session's previous error and result, sends the current
    /// drafts and stores whichever outcome arrives. Returns the submission
    /// identifier.
    pub async fn submit_session(&self, session: &mut EditorSession) -> SubmissionId {
        let pending = session.begin_submission();
        let resolution = self.dispatch(pending).await;
        let submission = resolution.submission;
        session.resolve(resolution);
        submission
    }

    /// Validates the drafts without ranking them.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when the request fails or is rejected.
    pub async fn validate(
        &self,
        drafts: &DraftCollection,
    ) -> Result<ValidationReport, SubmissionError> {
        let response = self.service.validate(drafts.to_payloads()).await?;
        let report: ValidationReport = interpret_response(&response)?;
        info!(
            valid = report.valid_count,
            invalid = report.invalid_count,
            "batch validated"
        );
        Ok(report)
    }

    /// Lists the tasks the service has prioritized so far.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when the request fails or is rejected.
    pub async fn list_tasks(&self) -> Result<TaskListing, SubmissionError> {
        let response = self.service.list_tasks().await?;
        interpret_response(&response)
    }

    /// Queries the service health check.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when the request fails or is rejected.
    pub async fn health(&self) -> Result<HealthStatus, SubmissionError> {
        let response = self.service.health().await?;
        interpret_response(&response)
    }
}
