//! Then steps for cascading delete scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use tracker::board::services::{ErrorKind, TrackerError};

fn ensure_not_found<T: std::fmt::Debug>(
    label: &str,
    result: Result<T, TrackerError>,
) -> Result<(), eyre::Report> {
    match result {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected {label} to be gone, got {other:?}")),
    }
}

#[then("the assignment succeeds")]
fn assignment_succeeds(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_assignment.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected successful assignment, got {other:?}")),
    }
}

#[then("the assignment is rejected as a bad request")]
fn assignment_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_assignment.as_ref() {
        Some(Err(err)) if err.kind() == ErrorKind::BadRequest => Ok(()),
        other => Err(eyre::eyre!("expected bad request, got {other:?}")),
    }
}

#[then(r#"task "{task}" has status "{status}""#)]
fn task_has_status(world: &BoardWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let stored = run_async(world.tracker.tasks().get(task_id))
        .map_err(|err| eyre::eyre!("lookup of {task} failed: {err}"))?;
    if stored.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected {task} to be {status}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"task "{task}" has no project"#)]
fn task_has_no_project(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let stored = run_async(world.tracker.tasks().get(task_id))
        .map_err(|err| eyre::eyre!("lookup of {task} failed: {err}"))?;
    if let Some(project_id) = stored.project_id() {
        return Err(eyre::eyre!("expected {task} unfiled, found project {project_id}"));
    }
    Ok(())
}

#[then(r#"project "{project}" lists no task "{task}""#)]
fn project_lists_no_task(
    world: &BoardWorld,
    project: String,
    task: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project(&project)?;
    let task_id = world.task(&task)?;
    let listed = run_async(world.tracker.tasks().get_all_by_project_id(project_id))
        .map_err(|err| eyre::eyre!("listing {project} failed: {err}"))?;
    if listed.iter().any(|row| row.id() == task_id) {
        return Err(eyre::eyre!("{task} is still listed under {project}"));
    }
    Ok(())
}

#[then(r#"task "{task}" is not found"#)]
fn task_not_found(world: &BoardWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    ensure_not_found(&task, run_async(world.tracker.tasks().get(task_id)))
}

#[then(r#"project "{project}" is not found"#)]
fn project_not_found(world: &BoardWorld, project: String) -> Result<(), eyre::Report> {
    let project_id = world.project(&project)?;
    ensure_not_found(&project, run_async(world.tracker.projects().get(project_id)))
}

#[then(r#"user "{name}" is not found"#)]
fn user_not_found(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let user_id = world.user(&name)?;
    ensure_not_found(&name, run_async(world.tracker.users().get(user_id)))
}
