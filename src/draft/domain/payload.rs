//! Conversion of drafts into request payloads.

use super::Draft;
use serde::{Serialize, Serializer};
use serde_json::Number;

/// Server-ready representation of one draft.
///
/// Numeric fields are `None` only when the user left the input exactly empty.
/// `None` fields are omitted from the JSON body entirely. Whole values are
/// written as JSON integers (`7`, not `7.0`). Values that did not parse are
/// kept as NaN and written as `null`, which the service reports back as a
/// per-task validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPayload {
    /// Title, passed through unchanged.
    pub title: String,
    /// Days until the deadline.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub deadline_days: Option<f64>,
    /// Effort estimate in hours.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub estimated_hours: Option<f64>,
    /// Importance score.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub importance: Option<f64>,
}

/// Normalizes a draft into its request payload.
///
/// Performs no validation and never fails: numeric-ness is the service's
/// concern.
#[must_use]
pub fn to_payload(draft: &Draft) -> NormalizedPayload {
    NormalizedPayload {
        title: draft.title().to_owned(),
        deadline_days: parse_optional_number(draft.deadline_days()),
        estimated_hours: parse_optional_number(draft.estimated_hours()),
        importance: parse_optional_number(draft.importance()),
    }
}

impl From<&Draft> for NormalizedPayload {
    fn from(draft: &Draft) -> Self {
        to_payload(draft)
    }
}

fn parse_optional_number(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    Some(parse_decimal(raw))
}

/// Decimal conversion with browser `Number()` whitespace rules: surrounding
/// whitespace is ignored and a blank string converts to zero.
fn parse_decimal(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn serialize_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    value.and_then(wire_number).serialize(serializer)
}

/// JSON form of a parsed number: integers when whole, `None` when not finite.
fn wire_number(value: f64) -> Option<Number> {
    value
        .to_string()
        .parse::<i64>()
        .map_or_else(|_| Number::from_f64(value), |whole| Some(Number::from(whole)))
}
