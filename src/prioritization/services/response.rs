//! Mapping of raw service responses onto outcomes.

use super::SubmissionError;
use crate::prioritization::ports::ServiceResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Interprets a completed response.
///
/// A success status yields the decoded body, unchanged. Any other status is a
/// whole-batch rejection whose message is the body's `error` string when the
/// service supplied one.
///
/// # Errors
///
/// Returns [`SubmissionError::Rejected`] for non-success statuses and
/// [`SubmissionError::MalformedResponse`] when a success body does not decode
/// into `T`.
pub fn interpret_response<T>(response: &ServiceResponse) -> Result<T, SubmissionError>
where
    T: DeserializeOwned,
{
    if !response.is_success() {
        return Err(SubmissionError::rejected(
            response.status(),
            server_error_message(response.body()),
        ));
    }
    serde_json::from_str(response.body())
        .map_err(|err| SubmissionError::MalformedResponse(err.to_string()))
}

/// Extracts the `error` string from a rejection body, if there is one.
fn server_error_message(body: &str) -> Option<String> {
    let document: Value = serde_json::from_str(body).ok()?;
    document
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}
