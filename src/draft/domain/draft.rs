//! The editable task draft.

use super::{DraftField, DraftId};
use serde::{Deserialize, Serialize};

/// One editable row of the task list.
///
/// Every field holds exactly what the user typed. Numeric fields are not
/// coerced while editing; an empty string means "unspecified".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    id: DraftId,
    title: String,
    deadline_days: String,
    estimated_hours: String,
    importance: String,
}

impl Draft {
    /// Creates a draft with a fresh identity and all fields empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: DraftId::new(),
            title: String::new(),
            deadline_days: String::new(),
            estimated_hours: String::new(),
            importance: String::new(),
        }
    }

    /// Returns the draft identity.
    #[must_use]
    pub const fn id(&self) -> DraftId {
        self.id
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw deadline, in days.
    #[must_use]
    pub fn deadline_days(&self) -> &str {
        &self.deadline_days
    }

    /// Returns the raw effort estimate, in hours.
    #[must_use]
    pub fn estimated_hours(&self) -> &str {
        &self.estimated_hours
    }

    /// Returns the raw importance.
    #[must_use]
    pub fn importance(&self) -> &str {
        &self.importance
    }

    /// Returns the raw value of `field`.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::DeadlineDays => &self.deadline_days,
            DraftField::EstimatedHours => &self.estimated_hours,
            DraftField::Importance => &self.importance,
        }
    }

    /// Replaces the raw value of `field`.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::DeadlineDays => &mut self.deadline_days,
            DraftField::EstimatedHours => &mut self.estimated_hours,
            DraftField::Importance => &mut self.importance,
        };
        *slot = value.into();
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the raw deadline.
    #[must_use]
    pub fn with_deadline_days(mut self, deadline_days: impl Into<String>) -> Self {
        self.deadline_days = deadline_days.into();
        self
    }

    /// Sets the raw effort estimate.
    #[must_use]
    pub fn with_estimated_hours(mut self, estimated_hours: impl Into<String>) -> Self {
        self.estimated_hours = estimated_hours.into();
        self
    }

    /// Sets the raw importance.
    #[must_use]
    pub fn with_importance(mut self, importance: impl Into<String>) -> Self {
        self.importance = importance.into();
        self
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::empty()
    }
}
