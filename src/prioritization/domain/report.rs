//! Documents returned by the companion endpoints.

use super::{InvalidTask, PrioritizedTask};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dry-run validation of a batch; nothing is scored or stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of tasks that passed validation.
    #[serde(default)]
    pub valid_count: usize,
    /// Number of tasks that failed validation.
    #[serde(default)]
    pub invalid_count: usize,
    /// Cleaned data of the tasks that passed.
    #[serde(default)]
    pub valid: Vec<Value>,
    /// Rejected tasks with their field errors.
    #[serde(default)]
    pub invalid: Vec<InvalidTask>,
}

/// Tasks previously prioritized by the service, in the order it lists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskListing {
    /// Total number of stored tasks.
    #[serde(default)]
    pub count: usize,
    /// Stored tasks.
    #[serde(default)]
    pub tasks: Vec<PrioritizedTask>,
}

/// Body of the service health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status, `ok` when healthy.
    pub status: String,
}

impl HealthStatus {
    /// Returns `true` when the service reports `ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
