//! Then steps for draft editing BDD scenarios.

use super::world::EditorWorld;
use rstest_bdd_macros::then;
use taskrank::draft::domain::to_payload;

#[then("the editor shows {count:usize} draft")]
fn editor_shows_one_draft(world: &EditorWorld, count: usize) -> Result<(), eyre::Report> {
    editor_shows_drafts(world, count)
}

#[then("the editor shows {count:usize} drafts")]
fn editor_shows_drafts(world: &EditorWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.session.drafts().len();
    if shown != count {
        return Err(eyre::eyre!("expected {count} drafts, found {shown}"));
    }
    Ok(())
}

#[then(r#"the drafts are titled "{titles}""#)]
fn drafts_are_titled(world: &EditorWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = world
        .session
        .drafts()
        .iter()
        .map(|draft| draft.title())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the payload of draft {row:usize} is '{json}'")]
fn payload_is(world: &EditorWorld, row: usize, json: String) -> Result<(), eyre::Report> {
    let id = world.draft_at(row)?;
    let draft = world
        .session
        .drafts()
        .get(id)
        .ok_or_else(|| eyre::eyre!("no draft at row {row}"))?;
    let actual = serde_json::to_string(&to_payload(draft))?;
    if actual != json {
        return Err(eyre::eyre!("expected payload {json}, found {actual}"));
    }
    Ok(())
}
