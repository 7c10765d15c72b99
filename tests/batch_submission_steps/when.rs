//! When steps for batch submission BDD scenarios.

use super::world::{SubmissionWorld, run_async};
use rstest_bdd_macros::when;
use taskrank::prioritization::adapters::memory::ServiceMode;

#[when("the drafts are submitted")]
fn submit_drafts(world: &mut SubmissionWorld) {
    run_async(world.service.submit_session(&mut world.session));
}

#[when("the service recovers")]
fn service_recovers(world: &mut SubmissionWorld) -> Result<(), eyre::Report> {
    world.backend.set_mode(ServiceMode::Healthy)?;
    Ok(())
}
