//! In-memory implementation of the prioritization service port.

use super::{PriorityCalculator, ValidTask, validate_task};
use crate::draft::domain::NormalizedPayload;
use crate::prioritization::{
    domain::{InvalidTask, PrioritizedTask, SubmissionResult, TaskListing, ValidationReport},
    ports::{PrioritizationService, ServiceResponse, TransportError, TransportResult},
};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// How the in-memory service answers requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServiceMode {
    /// Validate and rank like the remote service.
    #[default]
    Healthy,
    /// Answer every request with this response.
    Reject(ServiceResponse),
    /// Fail every request at the transport level with this message.
    Unreachable(String),
}

/// Thread-safe in-memory prioritization service.
///
/// Records every batch it receives so tests can inspect the exact request
/// bodies, and keeps ranked tasks for the listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPrioritizationService {
    state: Arc<RwLock<InMemoryServiceState>>,
}

#[derive(Debug, Default)]
struct InMemoryServiceState {
    mode: ServiceMode,
    received: Vec<Vec<Value>>,
    stored: Vec<PrioritizedTask>,
    next_task_number: u64,
}

impl InMemoryPrioritizationService {
    /// Creates a healthy service with nothing stored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service answering in the given mode.
    #[must_use]
    pub fn with_mode(mode: ServiceMode) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryServiceState {
                mode,
                ..InMemoryServiceState::default()
            })),
        }
    }

    /// Switches how subsequent requests are answered.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the internal lock is poisoned.
    pub fn set_mode(&self, mode: ServiceMode) -> TransportResult<()> {
        self.write_state()?.mode = mode;
        Ok(())
    }

    /// Returns every batch received so far, as the JSON that was sent.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the internal lock is poisoned.
    pub fn received_batches(&self) -> TransportResult<Vec<Vec<Value>>> {
        Ok(self.read_state()?.received.clone())
    }

    /// Returns the ranked tasks stored so far.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the internal lock is poisoned.
    pub fn stored_tasks(&self) -> TransportResult<Vec<PrioritizedTask>> {
        Ok(self.read_state()?.stored.clone())
    }

    fn read_state(&self) -> TransportResult<RwLockReadGuard<'_, InMemoryServiceState>> {
        self.state
            .read()
            .map_err(|err| TransportError::new(err.to_string()))
    }

    fn write_state(&self) -> TransportResult<RwLockWriteGuard<'_, InMemoryServiceState>> {
        self.state
            .write()
            .map_err(|err| TransportError::new(err.to_string()))
    }

    /// Applies the configured failure mode, recording `batch` when the
    /// request reached the service. Returns the canned rejection, if any.
    fn accept(&self, batch: Option<Vec<Value>>) -> TransportResult<Option<ServiceResponse>> {
        let mut state = self.write_state()?;
        if let ServiceMode::Unreachable(message) = &state.mode {
            return Err(TransportError::new(message.clone()));
        }
        state.received.extend(batch);
        Ok(match &state.mode {
            ServiceMode::Reject(response) => Some(response.clone()),
            ServiceMode::Healthy | ServiceMode::Unreachable(_) => None,
        })
    }
}

impl InMemoryServiceState {
    fn rank(&mut self, batch: &[Value]) -> SubmissionResult {
        let calculator = PriorityCalculator;
        let mut prioritized = Vec::new();
        let mut invalid = Vec::new();

        for raw in batch {
            match validate_task(raw) {
                Ok(task) => {
                    let (score, category) = calculator.calculate(&task);
                    let ranked = PrioritizedTask {
                        task_id: String::new(),
                        title: task.title.clone(),
                        priority_score: score,
                        priority_category: category.label().to_owned(),
                        deadline_days: Some(days_as_f64(task.deadline_days)),
                        estimated_hours: Some(task.estimated_hours),
                        importance: Some(f64::from(task.importance)),
                    };
                    prioritized.push(self.upsert(&task, ranked));
                }
                Err(errors) => invalid.push(InvalidTask::new(raw.clone(), errors)),
            }
        }

        sort_by_score(&mut prioritized);
        SubmissionResult::new(prioritized, invalid)
    }

    /// Stores a ranked task, reusing the identifier of an identical task.
    fn upsert(&mut self, task: &ValidTask, mut ranked: PrioritizedTask) -> PrioritizedTask {
        let existing = self.stored.iter_mut().find(|stored| {
            stored.title == task.title
                && stored.deadline_days == ranked.deadline_days
                && stored.estimated_hours == ranked.estimated_hours
                && stored.importance == ranked.importance
        });
        if let Some(stored) = existing {
            ranked.task_id.clone_from(&stored.task_id);
            *stored = ranked.clone();
            return ranked;
        }

        self.next_task_number += 1;
        ranked.task_id = format!("task-{}", self.next_task_number);
        self.stored.push(ranked.clone());
        ranked
    }

    fn listing(&self) -> TaskListing {
        let mut tasks = self.stored.clone();
        sort_by_score(&mut tasks);
        TaskListing {
            count: tasks.len(),
            tasks,
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "validated day counts are far below 2^53"
)]
const fn days_as_f64(days: i64) -> f64 {
    days as f64
}

fn sort_by_score(tasks: &mut [PrioritizedTask]) {
    tasks.sort_by(|left, right| right.priority_score.total_cmp(&left.priority_score));
}

fn validation_report(batch: &[Value]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for raw in batch {
        match validate_task(raw) {
            Ok(task) => report.valid.push(task.to_json()),
            Err(errors) => report.invalid.push(InvalidTask::new(raw.clone(), errors)),
        }
    }
    report.valid_count = report.valid.len();
    report.invalid_count = report.invalid.len();
    report
}

fn encode_batch(batch: &[NormalizedPayload]) -> TransportResult<Vec<Value>> {
    batch
        .iter()
        .map(|payload| {
            serde_json::to_value(payload).map_err(|err| TransportError::from_error(&err))
        })
        .collect()
}

fn ok_response<T: Serialize>(body: &T) -> TransportResult<ServiceResponse> {
    let text = serde_json::to_string(body).map_err(|err| TransportError::from_error(&err))?;
    Ok(ServiceResponse::new(200, text))
}

#[async_trait]
impl PrioritizationService for InMemoryPrioritizationService {
    async fn prioritize(&self, batch: Vec<NormalizedPayload>) -> TransportResult<ServiceResponse> {
        let documents = encode_batch(&batch)?;
        if let Some(rejection) = self.accept(Some(documents.clone()))? {
            return Ok(rejection);
        }
        let result = self.write_state()?.rank(&documents);
        debug!(
            prioritized = result.prioritized.len(),
            invalid = result.invalid.len(),
            "in-memory service ranked batch"
        );
        ok_response(&result)
    }

    async fn validate(&self, batch: Vec<NormalizedPayload>) -> TransportResult<ServiceResponse> {
        let documents = encode_batch(&batch)?;
        if let Some(rejection) = self.accept(Some(documents.clone()))? {
            return Ok(rejection);
        }
        ok_response(&validation_report(&documents))
    }

    async fn list_tasks(&self) -> TransportResult<ServiceResponse> {
        if let Some(rejection) = self.accept(None)? {
            return Ok(rejection);
        }
        let listing = self.read_state()?.listing();
        ok_response(&listing)
    }

    async fn health(&self) -> TransportResult<ServiceResponse> {
        if let Some(rejection) = self.accept(None)? {
            return Ok(rejection);
        }
        ok_response(&json!({ "status": "ok" }))
    }
}
