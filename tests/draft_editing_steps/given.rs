//! Given steps for draft editing BDD scenarios.

use super::world::EditorWorld;
use rstest_bdd_macros::given;
use taskrank::{
    draft::domain::{DraftCollection, DraftField},
    editor::EditorSession,
};

#[given("a new editor session")]
fn new_editor_session(world: &mut EditorWorld) {
    world.session = EditorSession::new();
}

#[given("an editor with {count:usize} titled drafts")]
fn editor_with_titled_drafts(world: &mut EditorWorld, count: usize) {
    let mut drafts = DraftCollection::empty();
    for row in 1..=count {
        let id = drafts.add_draft();
        drafts.update_field(id, DraftField::Title, format!("Draft {row}"));
    }
    world.session = EditorSession::with_drafts(drafts);
}
