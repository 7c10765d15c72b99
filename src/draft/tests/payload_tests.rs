//! Tests for payload normalization.

use crate::draft::domain::{Draft, NormalizedPayload, to_payload};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn empty_draft_yields_only_the_title() {
    let payload = to_payload(&Draft::empty());

    assert_eq!(
        payload,
        NormalizedPayload {
            title: String::new(),
            deadline_days: None,
            estimated_hours: None,
            importance: None,
        }
    );
    let body = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(body, json!({ "title": "" }));
}

#[rstest]
fn numeric_strings_become_numbers() {
    let draft = Draft::empty().with_importance("7");
    let payload = to_payload(&draft);

    assert_eq!(payload.importance, Some(7.0));
    let body = serde_json::to_value(&payload).expect("payload serializes");
    assert_eq!(body.get("importance"), Some(&json!(7)));
    assert!(body.get("importance").is_some_and(serde_json::Value::is_number));
}

#[rstest]
#[case("2", 2.0)]
#[case("3.5", 3.5)]
#[case(" 4 ", 4.0)]
#[case("   ", 0.0)]
#[case("1e2", 100.0)]
#[case("-1", -1.0)]
fn decimal_parsing_follows_number_conversion(#[case] raw: &str, #[case] expected: f64) {
    let payload = to_payload(&Draft::empty().with_estimated_hours(raw));

    assert_eq!(payload.estimated_hours, Some(expected));
}

#[rstest]
#[case("abc")]
#[case("12h")]
#[case("1,5")]
fn unparsable_text_becomes_nan_without_failing(#[case] raw: &str) {
    let payload = to_payload(&Draft::empty().with_deadline_days(raw));

    assert!(payload.deadline_days.is_some_and(f64::is_nan));
}

#[rstest]
fn nan_is_sent_as_null_not_omitted() {
    let payload = to_payload(&Draft::empty().with_title("Plan").with_deadline_days("x"));
    let body = serde_json::to_string(&payload).expect("payload serializes");

    assert_eq!(body, r#"{"title":"Plan","deadline_days":null}"#);
}

#[rstest]
fn title_passes_through_untrimmed() {
    let draft = Draft::empty().with_title("  spaced  ");
    let payload = NormalizedPayload::from(&draft);

    assert_eq!(payload.title, "  spaced  ");
    assert_eq!(draft.title(), "  spaced  ");
}

#[rstest]
fn whole_numbers_are_written_as_integers() {
    #[derive(serde::Deserialize)]
    struct StrictTask {
        deadline_days: u32,
        importance: u8,
    }

    let draft = Draft::empty()
        .with_title("Plan")
        .with_deadline_days("3")
        .with_importance("7.0");
    let body = serde_json::to_string(&to_payload(&draft)).expect("payload serializes");

    assert_eq!(body, r#"{"title":"Plan","deadline_days":3,"importance":7}"#);

    let strict: StrictTask = serde_json::from_str(&body).expect("integer fields decode");
    assert_eq!((strict.deadline_days, strict.importance), (3, 7));
}

#[rstest]
#[case("2.5", "2.5")]
#[case("-0", "0")]
#[case("   ", "0")]
#[case("1e2", "100")]
#[case("inf", "null")]
fn numbers_use_their_shortest_json_form(#[case] raw: &str, #[case] expected: &str) {
    let payload = to_payload(&Draft::empty().with_estimated_hours(raw));
    let body = serde_json::to_string(&payload).expect("payload serializes");

    assert_eq!(
        body,
        format!(r#"{{"title":"","estimated_hours":{expected}}}"#)
    );
}
