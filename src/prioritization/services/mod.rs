//! Application services for batch submission.

mod response;
mod submission;

pub use response::interpret_response;
pub use submission::{Resolution, SubmissionError, SubmissionOutcome, SubmissionService};
