//! When steps for draft editing BDD scenarios.

use super::world::EditorWorld;
use rstest_bdd_macros::when;
use taskrank::draft::domain::DraftField;

#[when("a draft is added")]
fn add_draft(world: &mut EditorWorld) {
    world.session.add_draft();
}

#[when("draft {row:usize} is removed")]
fn remove_draft(world: &mut EditorWorld, row: usize) -> Result<(), eyre::Report> {
    let id = world.draft_at(row)?;
    world
        .session
        .remove_draft(id)
        .ok_or_else(|| eyre::eyre!("draft at row {row} was not removed"))?;
    Ok(())
}

#[when(r#"the "{field}" of draft {row:usize} is set to "{value}""#)]
fn set_field(
    world: &mut EditorWorld,
    field: String,
    row: usize,
    value: String,
) -> Result<(), eyre::Report> {
    let draft_field = DraftField::try_from(field.as_str())?;
    let id = world.draft_at(row)?;
    if !world.session.update_field(id, draft_field, value) {
        return Err(eyre::eyre!("draft at row {row} was not updated"));
    }
    Ok(())
}
