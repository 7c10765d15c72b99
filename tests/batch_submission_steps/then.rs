//! Then steps for batch submission BDD scenarios.

use super::world::SubmissionWorld;
use rstest_bdd_macros::then;

#[then(r#"the ranked titles are "{titles}""#)]
fn ranked_titles(world: &SubmissionWorld, titles: String) -> Result<(), eyre::Report> {
    let result = world
        .session
        .result()
        .ok_or_else(|| eyre::eyre!("expected a result, found error {:?}", world.session.error()))?;
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = result
        .prioritized
        .iter()
        .map(|task| task.title.as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected ranking {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"{count:usize} task is reported invalid with label "{label}""#)]
fn invalid_with_label(
    world: &SubmissionWorld,
    count: usize,
    label: String,
) -> Result<(), eyre::Report> {
    let result = world
        .session
        .result()
        .ok_or_else(|| eyre::eyre!("expected a result"))?;
    if result.invalid.len() != count {
        return Err(eyre::eyre!(
            "expected {count} invalid tasks, found {}",
            result.invalid.len()
        ));
    }
    let labels: Vec<String> = result
        .invalid
        .iter()
        .map(|task| task.label().into_owned())
        .collect();
    if !labels.iter().all(|found| *found == label) {
        return Err(eyre::eyre!("expected labels {label}, found {labels:?}"));
    }
    Ok(())
}

#[then(r#"the top-level error is "{message}""#)]
fn top_level_error(world: &SubmissionWorld, message: String) -> Result<(), eyre::Report> {
    match world.session.error() {
        Some(shown) if shown == message => Ok(()),
        other => Err(eyre::eyre!("expected error {message:?}, found {other:?}")),
    }
}

#[then("no error is shown")]
fn no_error(world: &SubmissionWorld) -> Result<(), eyre::Report> {
    world.session.error().map_or(Ok(()), |shown| {
        Err(eyre::eyre!("expected no error, found {shown:?}"))
    })
}

#[then("no result is shown")]
fn no_result(world: &SubmissionWorld) -> Result<(), eyre::Report> {
    if world.session.result().is_some() {
        return Err(eyre::eyre!("expected no result"));
    }
    Ok(())
}
