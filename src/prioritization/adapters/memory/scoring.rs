//! Ranking formula used by the prioritization service.
//!
//! `score = urgency + importance + effort - infeasibility`, clamped to
//! 0..=100 and rounded to two decimals:
//!
//! - urgency: `max(0, (10 - min(deadline_days, 10)) * 4)`
//! - importance: `importance * 4`
//! - effort: `max(0, 20 - estimated_hours)`
//! - infeasibility: 20 when `estimated_hours > deadline_days * 8`
//!
//! A task due today is raised to at least the high-priority threshold.

use super::ValidTask;
use std::fmt;

const URGENCY_MAX_DAYS: i64 = 10;
const URGENCY_WEIGHT: i32 = 4;
const IMPORTANCE_WEIGHT: i32 = 4;
const EFFORT_MAX_HOURS: f64 = 20.0;
const INFEASIBILITY_PENALTY: f64 = 20.0;
const WORKING_HOURS_PER_DAY: i64 = 8;
const HIGH_PRIORITY_THRESHOLD: f64 = 70.0;
const MEDIUM_PRIORITY_THRESHOLD: f64 = 40.0;

/// Category assigned from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityCategory {
    /// Score of at least 70.
    High,
    /// Score of at least 40.
    Medium,
    /// Anything lower.
    Low,
}

impl PriorityCategory {
    /// Returns the label the service reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
        }
    }

    /// Categorizes a final score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for PriorityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computes priority scores for validated tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityCalculator;

impl PriorityCalculator {
    /// Returns the score and category of a task.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the ranking formula is defined over fractional hours"
    )]
    pub fn calculate(self, task: &ValidTask) -> (f64, PriorityCategory) {
        let mut raw = urgency(task.deadline_days)
            + f64::from(task.importance) * f64::from(IMPORTANCE_WEIGHT)
            + (EFFORT_MAX_HOURS - task.estimated_hours).max(0.0);

        if is_infeasible(task.deadline_days, task.estimated_hours) {
            raw -= INFEASIBILITY_PENALTY;
        }

        let mut score = (raw.clamp(0.0, 100.0) * 100.0).round() / 100.0;
        if task.deadline_days == 0 && score < HIGH_PRIORITY_THRESHOLD {
            score = HIGH_PRIORITY_THRESHOLD;
        }

        (score, PriorityCategory::from_score(score))
    }
}

fn urgency(deadline_days: i64) -> f64 {
    let remaining_days = (URGENCY_MAX_DAYS - deadline_days.min(URGENCY_MAX_DAYS)).max(0);
    let bounded = i32::try_from(remaining_days).unwrap_or_default();
    f64::from(bounded * URGENCY_WEIGHT)
}

fn is_infeasible(deadline_days: i64, estimated_hours: f64) -> bool {
    let capacity_hours = deadline_days.saturating_mul(WORKING_HOURS_PER_DAY);
    let bounded = u32::try_from(capacity_hours).unwrap_or(u32::MAX);
    estimated_hours > f64::from(bounded)
}
