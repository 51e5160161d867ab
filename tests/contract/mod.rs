//! Backend-agnostic behaviour checks shared by every storage backend.
//!
//! Each check creates its own uniquely named rows, so the suite can run
//! against a database that other tests are writing to at the same time.

pub mod cascade;
pub mod tasks;
pub mod users;

use mockable::DefaultClock;
use tracker::board::{
    domain::{ProjectId, TaskId, UserId},
    ports::StorageBackend,
    services::{AddProjectRequest, AddTaskRequest, AddUserRequest, EntityKind, Tracker, TrackerError},
};
use uuid::Uuid;

/// Identifier far beyond anything a test run generates.
pub const ABSENT_ID: i64 = i64::MAX - 7;

/// Returns an email address no other test uses.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4().simple())
}

/// Registers a user with a unique email.
pub async fn add_user<B>(tracker: &Tracker<B, DefaultClock>, name: &str) -> eyre::Result<UserId>
where
    B: StorageBackend + ?Sized,
{
    Ok(tracker
        .users()
        .add(AddUserRequest::new(name, unique_email(name)))
        .await?)
}

/// Creates a project without description.
pub async fn add_project<B>(
    tracker: &Tracker<B, DefaultClock>,
    user_id: UserId,
    name: &str,
) -> eyre::Result<ProjectId>
where
    B: StorageBackend + ?Sized,
{
    Ok(tracker
        .projects()
        .add(AddProjectRequest::new(user_id, name))
        .await?)
}

/// Creates a task, optionally filed under a project.
pub async fn add_task<B>(
    tracker: &Tracker<B, DefaultClock>,
    user_id: UserId,
    project_id: Option<ProjectId>,
    name: &str,
) -> eyre::Result<TaskId>
where
    B: StorageBackend + ?Sized,
{
    let request = AddTaskRequest::new(user_id, name);
    let filed = match project_id {
        Some(pid) => request.with_project(pid),
        None => request,
    };
    Ok(tracker.tasks().add(filed).await?)
}

/// Checks that `result` failed because `entity` `id` does not exist.
pub fn expect_not_found<T: std::fmt::Debug>(
    result: Result<T, TrackerError>,
    entity: EntityKind,
    id: i64,
) -> eyre::Result<()> {
    match result {
        Err(TrackerError::NotFound {
            entity: found,
            id: found_id,
        }) if found == entity && found_id == id => Ok(()),
        other => Err(eyre::eyre!("expected {entity} {id} not found, got {other:?}")),
    }
}
