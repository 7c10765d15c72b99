//! Display-ready view models.

use crate::draft::domain::{Draft, DraftField, InputKind};
use crate::editor::EditorSession;
use crate::prioritization::domain::{
    InvalidTask, PrioritizedTask, SubmissionResult, TaskListing, ValidationReport,
};
use serde::Serialize;

/// Returns the style class for a category label: its first
/// whitespace-delimited token, lowercased.
#[must_use]
pub fn category_class(label: &str) -> String {
    label
        .split_whitespace()
        .next()
        .map_or_else(String::new, str::to_lowercase)
}

/// One ranked task, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrioritizedRow {
    /// Service-assigned identifier.
    pub task_id: String,
    /// Task title.
    pub title: String,
    /// Score as text.
    pub priority_score: String,
    /// Category label.
    pub priority_category: String,
    /// Style class derived from the category label.
    pub category_class: String,
    /// Echoed deadline, empty when absent.
    pub deadline_days: String,
    /// Echoed effort estimate, empty when absent.
    pub estimated_hours: String,
    /// Echoed importance, empty when absent.
    pub importance: String,
}

impl From<&PrioritizedTask> for PrioritizedRow {
    fn from(task: &PrioritizedTask) -> Self {
        Self {
            task_id: task.task_id.clone(),
            title: task.title.clone(),
            priority_score: task.priority_score.to_string(),
            priority_category: task.priority_category.clone(),
            category_class: category_class(&task.priority_category),
            deadline_days: display_number(task.deadline_days),
            estimated_hours: display_number(task.estimated_hours),
            importance: display_number(task.importance),
        }
    }
}

/// One rejected task, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRow {
    /// Submitted title or the missing-title placeholder.
    pub label: String,
    /// Compact JSON of the field error mapping.
    pub errors_json: String,
}

impl From<&InvalidTask> for InvalidRow {
    fn from(task: &InvalidTask) -> Self {
        Self {
            label: task.label().into_owned(),
            errors_json: task.errors.to_json(),
        }
    }
}

/// Reconciled result shape consumed by presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultView {
    /// Ranked rows in server order.
    pub prioritized: Vec<PrioritizedRow>,
    /// Rejected rows in server order.
    pub invalid: Vec<InvalidRow>,
}

impl ResultView {
    /// Builds the view of a submission result without reordering anything.
    #[must_use]
    pub fn from_result(result: &SubmissionResult) -> Self {
        Self {
            prioritized: result.prioritized.iter().map(PrioritizedRow::from).collect(),
            invalid: result.invalid.iter().map(InvalidRow::from).collect(),
        }
    }
}

/// One labelled input of a draft row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    /// Wire name of the field.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Input control kind.
    pub input_kind: InputKind,
    /// Raw value as typed.
    pub value: String,
}

/// One draft as an editor row ("Task N").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftRow {
    /// 1-based display position.
    pub row: usize,
    /// Stable draft identity.
    pub id: String,
    /// Fields in display order.
    pub fields: Vec<FieldRow>,
}

impl DraftRow {
    fn new(row: usize, draft: &Draft) -> Self {
        let fields = DraftField::ALL
            .iter()
            .map(|field| FieldRow {
                name: field.as_str(),
                label: field.label(),
                input_kind: field.input_kind(),
                value: draft.field(*field).to_owned(),
            })
            .collect();
        Self {
            row,
            id: draft.id().to_string(),
            fields,
        }
    }
}

/// Everything the editor shows: rows, the top-level error and the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Draft rows in display order.
    pub drafts: Vec<DraftRow>,
    /// Top-level error of the last submission.
    pub error: Option<String>,
    /// Result of the last successful submission.
    pub result: Option<ResultView>,
}

impl SessionView {
    /// Builds the view of an editor session.
    #[must_use]
    pub fn from_session(session: &EditorSession) -> Self {
        Self {
            drafts: session
                .drafts()
                .iter()
                .enumerate()
                .map(|(index, draft)| DraftRow::new(index + 1, draft))
                .collect(),
            error: session.error().map(str::to_owned),
            result: session.result().map(ResultView::from_result),
        }
    }
}

/// Summary of a dry-run validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationView {
    /// Tasks that passed.
    pub valid_count: usize,
    /// Tasks that failed.
    pub invalid_count: usize,
    /// Rejected rows in server order.
    pub invalid: Vec<InvalidRow>,
}

impl ValidationView {
    /// Builds the view of a validation report.
    #[must_use]
    pub fn from_report(report: &ValidationReport) -> Self {
        Self {
            valid_count: report.valid_count,
            invalid_count: report.invalid_count,
            invalid: report.invalid.iter().map(InvalidRow::from).collect(),
        }
    }
}

/// Previously prioritized tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingView {
    /// Total reported by the service.
    pub count: usize,
    /// Rows in server order.
    pub tasks: Vec<PrioritizedRow>,
}

impl ListingView {
    /// Builds the view of a task listing.
    #[must_use]
    pub fn from_listing(listing: &TaskListing) -> Self {
        Self {
            count: listing.count,
            tasks: listing.tasks.iter().map(PrioritizedRow::from).collect(),
        }
    }
}

fn display_number(value: Option<f64>) -> String {
    value.map_or_else(String::new, |number| number.to_string())
}
