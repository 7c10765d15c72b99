//! Tests for the draft collection controller.

use crate::draft::domain::{DraftCollection, DraftField, DraftId};
use rstest::{fixture, rstest};

#[fixture]
fn three_drafts() -> (DraftCollection, Vec<DraftId>) {
    let mut collection = DraftCollection::new();
    collection.add_draft();
    collection.add_draft();
    let ids = collection.ids();
    (collection, ids)
}

#[rstest]
fn new_collection_starts_with_one_empty_draft() {
    let collection = DraftCollection::new();

    assert_eq!(collection.len(), 1);
    let draft = collection.iter().next().expect("one draft");
    assert_eq!(draft.title(), "");
}

#[rstest]
fn add_draft_appends_at_the_end(three_drafts: (DraftCollection, Vec<DraftId>)) {
    let (mut collection, ids) = three_drafts;
    let added = collection.add_draft();

    let mut expected = ids;
    expected.push(added);
    assert_eq!(collection.ids(), expected);
    assert_eq!(collection.row_number(added), Some(4));
}

#[rstest]
fn remove_draft_keeps_remaining_order(three_drafts: (DraftCollection, Vec<DraftId>)) {
    let (mut collection, ids) = three_drafts;
    let [first, middle, last] = ids.as_slice() else {
        panic!("fixture builds three drafts");
    };

    let removed = collection.remove_draft(*middle).expect("draft exists");

    assert_eq!(removed.id(), *middle);
    assert_eq!(collection.ids(), vec![*first, *last]);
    assert_eq!(collection.row_number(*last), Some(2));
}

#[rstest]
fn removing_an_unknown_identity_is_a_no_op(three_drafts: (DraftCollection, Vec<DraftId>)) {
    let (mut collection, _) = three_drafts;
    let before = collection.clone();

    assert!(collection.remove_draft(DraftId::new()).is_none());
    assert_eq!(collection, before);
}

#[rstest]
fn removing_the_only_draft_leaves_an_empty_collection() {
    let mut collection = DraftCollection::new();
    let only = collection.ids();
    let id = only.first().copied().expect("one draft");

    collection.remove_draft(id);

    assert!(collection.is_empty());
    assert!(collection.to_payloads().is_empty());
}

#[rstest]
fn update_field_touches_only_the_target(three_drafts: (DraftCollection, Vec<DraftId>)) {
    let (mut collection, ids) = three_drafts;
    let target = ids.get(1).copied().expect("middle draft");

    assert!(collection.update_field(target, DraftField::Title, "Ship it"));

    assert_eq!(collection.ids(), ids);
    for draft in &collection {
        let expected = if draft.id() == target { "Ship it" } else { "" };
        assert_eq!(draft.title(), expected);
    }
}

#[rstest]
fn update_field_on_unknown_identity_changes_nothing(
    three_drafts: (DraftCollection, Vec<DraftId>),
) {
    let (mut collection, _) = three_drafts;
    let before = collection.clone();

    assert!(!collection.update_field(DraftId::new(), DraftField::Importance, "9"));
    assert_eq!(collection, before);
}

#[rstest]
fn removed_identities_are_not_reused() {
    let mut collection = DraftCollection::new();
    let ids = collection.ids();
    let first = ids.first().copied().expect("one draft");
    collection.remove_draft(first);

    let replacement = collection.add_draft();

    assert_ne!(replacement, first);
    assert!(collection.get(first).is_none());
}

#[rstest]
fn to_payloads_preserves_collection_order(three_drafts: (DraftCollection, Vec<DraftId>)) {
    let (mut collection, ids) = three_drafts;
    for (index, id) in ids.iter().enumerate() {
        collection.update_field(*id, DraftField::Title, format!("Task {}", index + 1));
    }

    let titles: Vec<_> = collection
        .to_payloads()
        .into_iter()
        .map(|payload| payload.title)
        .collect();

    assert_eq!(titles, vec!["Task 1", "Task 2", "Task 3"]);
}
