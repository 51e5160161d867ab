//! Existence checks shared by the services.

use super::{EntityKind, TrackerError, TrackerResult};
use crate::board::{
    domain::{Project, ProjectId, Task, TaskId, User, UserId},
    ports::StorageBackend,
};

pub(super) async fn require_user<B>(backend: &B, id: UserId) -> TrackerResult<User>
where
    B: StorageBackend + ?Sized,
{
    backend
        .users()
        .find_by_id(id)
        .await?
        .ok_or_else(|| missing(EntityKind::User, id.value()))
}

pub(super) async fn require_project<B>(backend: &B, id: ProjectId) -> TrackerResult<Project>
where
    B: StorageBackend + ?Sized,
{
    backend
        .projects()
        .find_by_id(id)
        .await?
        .ok_or_else(|| missing(EntityKind::Project, id.value()))
}

pub(super) async fn require_task<B>(backend: &B, id: TaskId) -> TrackerResult<Task>
where
    B: StorageBackend + ?Sized,
{
    backend
        .tasks()
        .find_by_id(id)
        .await?
        .ok_or_else(|| missing(EntityKind::Task, id.value()))
}

pub(super) async fn user_exists<B>(backend: &B, id: UserId) -> TrackerResult<bool>
where
    B: StorageBackend + ?Sized,
{
    Ok(backend.users().find_by_id(id).await?.is_some())
}

fn missing(entity: EntityKind, id: i64) -> TrackerError {
    tracing::warn!(entity = %entity, id, "referenced entity not found");
    TrackerError::not_found(entity, id)
}

/// Blank descriptions are stored as absent.
pub(super) fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.trim().is_empty())
}
