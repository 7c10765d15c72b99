//! Reconciled result of a successful batch submission.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use serde_json::{Map, Value};

/// Label shown for a rejected task that carried no usable title.
pub const MISSING_TITLE_PLACEHOLDER: &str = "—";

/// Body of a successful prioritization response.
///
/// Stored as the service returned it: `prioritized` is already ranked and
/// `invalid` lists the rejected tasks in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Accepted tasks, ranked by the service.
    #[serde(default)]
    pub prioritized: Vec<PrioritizedTask>,
    /// Tasks rejected by per-field validation.
    #[serde(default)]
    pub invalid: Vec<InvalidTask>,
    /// Count echoed by the service, when it sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioritized_count: Option<usize>,
    /// Count echoed by the service, when it sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_count: Option<usize>,
}

impl SubmissionResult {
    /// Creates a result from ranked and rejected tasks, filling in counts.
    #[must_use]
    pub fn new(prioritized: Vec<PrioritizedTask>, invalid: Vec<InvalidTask>) -> Self {
        Self {
            prioritized_count: Some(prioritized.len()),
            invalid_count: Some(invalid.len()),
            prioritized,
            invalid,
        }
    }

    /// Returns `true` when the service neither ranked nor rejected anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prioritized.is_empty() && self.invalid.is_empty()
    }
}

/// A task the service accepted and scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedTask {
    /// Service-assigned identifier.
    #[serde(default, deserialize_with = "string_or_number")]
    pub task_id: String,
    /// Echoed (trimmed) title.
    pub title: String,
    /// Score in the range 0 to 100.
    pub priority_score: f64,
    /// Category label such as `High Priority`.
    pub priority_category: String,
    /// Echoed deadline in days.
    #[serde(default)]
    pub deadline_days: Option<f64>,
    /// Echoed effort estimate in hours.
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    /// Echoed importance.
    #[serde(default)]
    pub importance: Option<f64>,
}

/// A task the service rejected, paired with its field errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvalidTask {
    /// The task data exactly as submitted.
    #[serde(default)]
    pub task: Value,
    /// Field name to error description(s).
    #[serde(default)]
    pub errors: ValidationErrors,
}

impl InvalidTask {
    /// Creates a rejected-task entry.
    #[must_use]
    pub const fn new(task: Value, errors: ValidationErrors) -> Self {
        Self { task, errors }
    }

    /// Returns the submitted title, or [`MISSING_TITLE_PLACEHOLDER`] when the
    /// task had no title or an empty, zero, false or null one.
    ///
    /// Non-string scalars, such as a numeric title, are shown as their JSON
    /// text.
    #[must_use]
    pub fn label(&self) -> Cow<'_, str> {
        match self.task.get("title") {
            Some(Value::String(title)) if !title.is_empty() => Cow::Borrowed(title),
            Some(Value::Number(number)) if number.as_f64().is_some_and(is_nonzero) => {
                Cow::Owned(number.to_string())
            }
            Some(Value::Bool(true)) => Cow::Borrowed("true"),
            _ => Cow::Borrowed(MISSING_TITLE_PLACEHOLDER),
        }
    }
}

const fn is_nonzero(value: f64) -> bool {
    value.abs() > 0.0
}

/// Mapping of field name to error text or list of texts.
///
/// Field order is the order the service reported them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Map<String, Value>);

impl ValidationErrors {
    /// Creates an empty error mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the error list of `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        let entry = self
            .0
            .entry(field.to_owned())
            .or_insert_with(|| Value::Array(Vec::new()));
        let text = Value::String(message.into());
        match entry {
            Value::Array(messages) => messages.push(text),
            other => *other = Value::Array(vec![other.take(), text]),
        }
    }

    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates field names in reported order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the messages reported for `field`, flattening lists.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<String> {
        self.0.get(field).map(flatten_messages).unwrap_or_default()
    }

    /// Renders the mapping as compact JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ValidationErrors {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn flatten_messages(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items.iter().flat_map(flatten_messages).collect(),
        other => vec![other.to_string()],
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}
