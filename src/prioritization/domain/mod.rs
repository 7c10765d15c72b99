//! Domain model for prioritization responses and submissions.
//!
//! Response types mirror the service's JSON documents and are stored without
//! reshaping: server order is display order.

mod ids;
mod report;
mod result;
mod submission;

pub use ids::SubmissionId;
pub use report::{HealthStatus, TaskListing, ValidationReport};
pub use result::{
    InvalidTask, MISSING_TITLE_PLACEHOLDER, PrioritizedTask, SubmissionResult, ValidationErrors,
};
pub use submission::PendingSubmission;
