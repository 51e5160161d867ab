//! When steps for cascading delete scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"task "{task}" is assigned to project "{project}""#)]
fn assign_task(world: &mut BoardWorld, task: String, project: String) -> Result<(), eyre::Report> {
    let task_id = world.task(&task)?;
    let project_id = world.project(&project)?;
    let result = run_async(world.tracker.tasks().assign_project(task_id, project_id));
    world.last_assignment = Some(result);
    Ok(())
}

#[when(r#"project "{project}" is deleted"#)]
fn delete_project(world: &mut BoardWorld, project: String) -> Result<(), eyre::Report> {
    let project_id = world.project(&project)?;
    run_async(world.tracker.projects().delete(project_id)).wrap_err("delete scenario project")
}

#[when(r#"user "{name}" is deleted"#)]
fn delete_user(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let user_id = world.user(&name)?;
    run_async(world.tracker.users().delete(user_id)).wrap_err("delete scenario user")
}
