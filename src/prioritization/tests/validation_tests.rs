//! Tests for per-field task validation.

use crate::prioritization::adapters::memory::{ValidTask, validate_task};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
fn valid_task_is_cleaned() {
    let raw = json!({
        "title": "  Write report  ",
        "deadline_days": "3",
        "estimated_hours": "2.5",
        "importance": 7.0
    });

    let task = validate_task(&raw).expect("task is valid");

    assert_eq!(
        task,
        ValidTask {
            title: "Write report".to_owned(),
            deadline_days: 3,
            estimated_hours: 2.5,
            importance: 7,
        }
    );
    assert_eq!(
        task.to_json(),
        json!({"title": "Write report", "deadline_days": 3, "estimated_hours": 2.5, "importance": 7})
    );
}

#[rstest]
fn every_missing_field_is_reported() {
    let errors = validate_task(&json!({})).expect_err("empty task is invalid");

    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(
        fields,
        vec!["title", "deadline_days", "estimated_hours", "importance"]
    );
    for field in fields {
        assert_eq!(errors.messages(field), vec!["This field is required."]);
    }
}

#[rstest]
#[case("title", json!(""), "This field may not be blank.")]
#[case("title", json!("   "), "This field may not be blank.")]
#[case("title", json!(null), "This field may not be null.")]
#[case("title", json!(["a"]), "Not a valid string.")]
#[case("title", json!("x".repeat(201)), "Ensure this field has no more than 200 characters.")]
#[case("deadline_days", json!(-1), "Ensure this value is greater than or equal to 0.")]
#[case("deadline_days", json!(2.5), "A valid integer is required.")]
#[case("deadline_days", json!("soon"), "A valid integer is required.")]
#[case("deadline_days", json!(true), "A valid integer is required.")]
#[case("estimated_hours", json!(-0.5), "Ensure this value is greater than or equal to 0.0.")]
#[case(
    "estimated_hours",
    json!(10_001),
    "estimated_hours exceeds the maximum allowed value (10,000)."
)]
#[case("estimated_hours", json!("lots"), "A valid number is required.")]
#[case("importance", json!(0), "Ensure this value is greater than or equal to 1.")]
#[case("importance", json!(11), "Ensure this value is less than or equal to 10.")]
fn field_errors_use_service_messages(
    #[case] field: &str,
    #[case] value: Value,
    #[case] expected: &str,
) {
    let mut raw = json!({
        "title": "Plan",
        "deadline_days": 3,
        "estimated_hours": 2,
        "importance": 5
    });
    if let Some(object) = raw.as_object_mut() {
        object.insert(field.to_owned(), value);
    }

    let errors = validate_task(&raw).expect_err("task is invalid");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.messages(field), vec![expected.to_owned()]);
}

#[rstest]
#[case("4.00", 4)]
#[case(" 6 ", 6)]
fn integer_strings_with_zero_fraction_are_accepted(#[case] raw: &str, #[case] expected: i64) {
    let task = validate_task(&json!({
        "title": "Plan",
        "deadline_days": raw,
        "estimated_hours": 1,
        "importance": 1
    }))
    .expect("task is valid");

    assert_eq!(task.deadline_days, expected);
}

#[rstest]
fn non_objects_report_non_field_errors() {
    let errors = validate_task(&json!("Plan")).expect_err("string is not a task");

    assert_eq!(
        errors.messages("non_field_errors"),
        vec!["Invalid data. Expected a dictionary, but got str."]
    );
}
