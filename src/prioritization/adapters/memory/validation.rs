//! Per-field validation of submitted tasks.

use crate::prioritization::domain::ValidationErrors;
use serde_json::{Map, Value, json};

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_AN_INTEGER: &str = "A valid integer is required.";
const NOT_A_NUMBER: &str = "A valid number is required.";
const MAX_TITLE_CHARS: usize = 200;
const MAX_ESTIMATED_HOURS: f64 = 10_000.0;

/// A task that passed validation, with cleaned values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTask {
    /// Title with surrounding whitespace removed.
    pub title: String,
    /// Days until the deadline, at least zero.
    pub deadline_days: i64,
    /// Effort estimate, between 0 and 10 000 hours.
    pub estimated_hours: f64,
    /// Importance, between 1 and 10.
    pub importance: u8,
}

impl ValidTask {
    /// Returns the cleaned task as JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "deadline_days": self.deadline_days,
            "estimated_hours": self.estimated_hours,
            "importance": self.importance,
        })
    }
}

/// Validates one submitted task document.
///
/// # Errors
///
/// Returns the collected field errors when any field is missing, null or out
/// of range. All fields are checked, so every problem is reported at once.
pub fn validate_task(raw: &Value) -> Result<ValidTask, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let Some(object) = raw.as_object() else {
        errors.push(
            "non_field_errors",
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(raw)
            ),
        );
        return Err(errors);
    };

    let checked = (
        check_field(object, "title", &mut errors, parse_title),
        check_field(object, "deadline_days", &mut errors, |value| {
            parse_integer(value, 0, None)
        }),
        check_field(object, "estimated_hours", &mut errors, parse_hours),
        check_field(object, "importance", &mut errors, |value| {
            parse_integer(value, 1, Some(10))
        })
        .and_then(|value| u8::try_from(value).ok()),
    );

    match checked {
        (Some(title), Some(deadline_days), Some(estimated_hours), Some(importance))
            if errors.is_empty() =>
        {
            Ok(ValidTask {
                title,
                deadline_days,
                estimated_hours,
                importance,
            })
        }
        _ => Err(errors),
    }
}

fn check_field<T>(
    object: &Map<String, Value>,
    name: &str,
    errors: &mut ValidationErrors,
    parse: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    let outcome = match object.get(name) {
        None => Err(REQUIRED.to_owned()),
        Some(Value::Null) => Err(NOT_NULL.to_owned()),
        Some(value) => parse(value),
    };
    outcome.map_err(|message| errors.push(name, message)).ok()
}

fn parse_title(value: &Value) -> Result<String, String> {
    let text = match value {
        Value::String(text) => text.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
            return Err(NOT_A_STRING.to_owned());
        }
    };
    if text.is_empty() {
        return Err(NOT_BLANK.to_owned());
    }
    if text.chars().count() > MAX_TITLE_CHARS {
        return Err(format!(
            "Ensure this field has no more than {MAX_TITLE_CHARS} characters."
        ));
    }
    Ok(text)
}

fn parse_integer(value: &Value, min: i64, max: Option<i64>) -> Result<i64, String> {
    let parsed = match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral_float)),
        Value::String(text) => parse_integer_text(text),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
    .ok_or_else(|| NOT_AN_INTEGER.to_owned())?;

    if parsed < min {
        return Err(format!(
            "Ensure this value is greater than or equal to {min}."
        ));
    }
    if let Some(limit) = max.filter(|limit| parsed > *limit) {
        return Err(format!("Ensure this value is less than or equal to {limit}."));
    }
    Ok(parsed)
}

/// Accepts floats with no fractional part, such as `3.0`.
fn integral_float(value: f64) -> Option<i64> {
    parse_integer_text(&value.to_string())
}

/// Accepts integers with an optional all-zero decimal tail, such as `"4.00"`.
fn parse_integer_text(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let digits = match trimmed.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|ch| ch == '0') => whole,
        Some(_) => return None,
        None => trimmed,
    };
    digits.parse().ok()
}

fn parse_hours(value: &Value) -> Result<f64, String> {
    let hours = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
    .filter(|number| number.is_finite())
    .ok_or_else(|| NOT_A_NUMBER.to_owned())?;

    if hours < 0.0 {
        return Err("Ensure this value is greater than or equal to 0.0.".to_owned());
    }
    if hours > MAX_ESTIMATED_HOURS {
        return Err("estimated_hours exceeds the maximum allowed value (10,000).".to_owned());
    }
    Ok(hours)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
