//! Editable draft fields and their presentation metadata.

use super::ParseDraftFieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four user-editable fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    /// Free-text task title.
    Title,
    /// Days until the task is due.
    DeadlineDays,
    /// Estimated effort in hours.
    EstimatedHours,
    /// Importance on a 1 to 10 scale (not enforced client side).
    Importance,
}

/// Kind of input control a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Free text.
    Text,
    /// Numeric entry, still stored as a raw string.
    Number,
}

impl DraftField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [
        Self::Title,
        Self::DeadlineDays,
        Self::EstimatedHours,
        Self::Importance,
    ];

    /// Returns the wire name used in request payloads and error mappings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::DeadlineDays => "deadline_days",
            Self::EstimatedHours => "estimated_hours",
            Self::Importance => "importance",
        }
    }

    /// Returns the human-readable input label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::DeadlineDays => "Deadline (days)",
            Self::EstimatedHours => "Estimated Hours",
            Self::Importance => "Importance (1–10)",
        }
    }

    /// Returns the input control kind for this field.
    #[must_use]
    pub const fn input_kind(self) -> InputKind {
        match self {
            Self::Title => InputKind::Text,
            Self::DeadlineDays | Self::EstimatedHours | Self::Importance => InputKind::Number,
        }
    }
}

impl TryFrom<&str> for DraftField {
    type Error = ParseDraftFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "title" => Ok(Self::Title),
            "deadline_days" => Ok(Self::DeadlineDays),
            "estimated_hours" => Ok(Self::EstimatedHours),
            "importance" => Ok(Self::Importance),
            _ => Err(ParseDraftFieldError(value.to_owned())),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
