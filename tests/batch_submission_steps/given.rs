//! Given steps for batch submission BDD scenarios.

use super::world::SubmissionWorld;
use rstest_bdd_macros::given;
use taskrank::{
    draft::domain::DraftField,
    prioritization::{adapters::memory::ServiceMode, ports::ServiceResponse},
};

#[given(
    r#"a draft "{title}" due in "{days}" days taking "{hours}" hours with importance "{importance}""#
)]
fn draft_with_fields(
    world: &mut SubmissionWorld,
    title: String,
    days: String,
    hours: String,
    importance: String,
) {
    add_draft(world, [title, days, hours, importance]);
}

#[given(
    r#"an untitled draft due in "{days}" days taking "{hours}" hours with importance "{importance}""#
)]
fn untitled_draft(world: &mut SubmissionWorld, days: String, hours: String, importance: String) {
    add_draft(world, [String::new(), days, hours, importance]);
}

#[given("the service rejects batches with status {status:u16} and body '{body}'")]
fn service_rejects(world: &mut SubmissionWorld, status: u16, body: String) -> Result<(), eyre::Report> {
    world
        .backend
        .set_mode(ServiceMode::Reject(ServiceResponse::new(status, body)))?;
    Ok(())
}

#[given("the service rejects batches with status {status:u16} and an empty body")]
fn service_rejects_without_body(world: &mut SubmissionWorld, status: u16) -> Result<(), eyre::Report> {
    world
        .backend
        .set_mode(ServiceMode::Reject(ServiceResponse::new(status, "")))?;
    Ok(())
}

#[given(r#"the service is unreachable with "{message}""#)]
fn service_unreachable(world: &mut SubmissionWorld, message: String) -> Result<(), eyre::Report> {
    world.backend.set_mode(ServiceMode::Unreachable(message))?;
    Ok(())
}

fn add_draft(world: &mut SubmissionWorld, values: [String; 4]) {
    let id = world.session.add_draft();
    for (field, value) in DraftField::ALL.into_iter().zip(values) {
        world.session.update_field(id, field, value);
    }
}
