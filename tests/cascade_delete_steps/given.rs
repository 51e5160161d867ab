//! Given steps for cascading delete scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tracker::board::services::{AddProjectRequest, AddTaskRequest, AddUserRequest};

#[given(r#"a user "{name}" with email "{email}""#)]
fn user_with_email(world: &mut BoardWorld, name: String, email: String) -> Result<(), eyre::Report> {
    let id = run_async(
        world
            .tracker
            .users()
            .add(AddUserRequest::new(name.clone(), email)),
    )
    .wrap_err("register scenario user")?;
    world.users.insert(name, id);
    Ok(())
}

#[given(r#"a project "{project}" owned by "{owner}""#)]
fn project_owned_by(
    world: &mut BoardWorld,
    project: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let user_id = world.user(&owner)?;
    let id = run_async(
        world
            .tracker
            .projects()
            .add(AddProjectRequest::new(user_id, project.clone())),
    )
    .wrap_err("create scenario project")?;
    world.projects.insert(project, id);
    Ok(())
}

#[given(r#"a task "{task}" owned by "{owner}" in project "{project}""#)]
fn task_in_project(
    world: &mut BoardWorld,
    task: String,
    owner: String,
    project: String,
) -> Result<(), eyre::Report> {
    let user_id = world.user(&owner)?;
    let project_id = world.project(&project)?;
    let request = AddTaskRequest::new(user_id, task.clone()).with_project(project_id);
    let id = run_async(world.tracker.tasks().add(request)).wrap_err("create filed task")?;
    world.tasks.insert(task, id);
    Ok(())
}

#[given(r#"a task "{task}" owned by "{owner}" without a project"#)]
fn task_without_project(
    world: &mut BoardWorld,
    task: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let user_id = world.user(&owner)?;
    let request = AddTaskRequest::new(user_id, task.clone());
    let id = run_async(world.tracker.tasks().add(request)).wrap_err("create loose task")?;
    world.tasks.insert(task, id);
    Ok(())
}
