//! Task creation, editing, status transitions and project assignment.

use super::{
    AddTaskRequest, EditTaskRequest, EntityKind, TrackerError, TrackerResult,
    lookup::{normalize_description, require_project, require_task, require_user, user_exists},
};
use crate::board::{
    domain::{Project, ProjectId, Task, TaskId, TaskStatus, UserId},
    ports::{NewTask, StorageBackend, StoreError, TaskChanges},
};
use mockable::Clock;
use std::sync::Arc;

/// Task orchestration service.
pub struct TaskService<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    backend: Arc<B>,
    clock: Arc<C>,
}

impl<B, C> Clone for TaskService<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, C> TaskService<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a task service over the given backend and clock.
    #[must_use]
    pub const fn new(backend: Arc<B>, clock: Arc<C>) -> Self {
        Self { backend, clock }
    }

    /// Retrieves a task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the task does not exist.
    pub async fn get(&self, id: TaskId) -> TrackerResult<Task> {
        require_task(&*self.backend, id).await
    }

    /// Lists every task.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn get_all(&self) -> TrackerResult<Vec<Task>> {
        Ok(self.backend.tasks().list().await?)
    }

    /// Lists the tasks owned by a user.
    ///
    /// An absent user yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn get_all_by_user_id(&self, user_id: UserId) -> TrackerResult<Vec<Task>> {
        if !user_exists(&*self.backend, user_id).await? {
            tracing::debug!(user_id = %user_id, "listing tasks of absent user");
            return Ok(Vec::new());
        }
        Ok(self.backend.tasks().list_by_user(user_id).await?)
    }

    /// Lists the tasks filed under a project.
    ///
    /// An absent project yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn get_all_by_project_id(&self, project_id: ProjectId) -> TrackerResult<Vec<Task>> {
        if self.backend.projects().find_by_id(project_id).await?.is_none() {
            tracing::debug!(project_id = %project_id, "listing tasks of absent project");
            return Ok(Vec::new());
        }
        Ok(self.backend.tasks().list_by_project(project_id).await?)
    }

    /// Creates a task for an existing user, optionally filed under one of
    /// that user's projects.
    ///
    /// The new task always starts as [`TaskStatus::New`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the user or project does not
    /// exist and [`TrackerError::BadRequest`] when the project belongs to a
    /// different user.
    pub async fn add(&self, request: AddTaskRequest) -> TrackerResult<TaskId> {
        let AddTaskRequest {
            user_id,
            project_id,
            name,
            description,
            status,
        } = request;
        require_user(&*self.backend, user_id).await?;
        if let Some(pid) = project_id {
            let project = require_project(&*self.backend, pid).await?;
            ensure_same_owner(user_id, &project)?;
        }
        if let Some(requested) = status {
            tracing::debug!(%requested, "ignoring requested status on task creation");
        }

        let new_task = NewTask {
            user_id,
            project_id,
            name,
            description: normalize_description(description),
            status: TaskStatus::New,
            created_at: self.clock.utc(),
        };
        match self.backend.tasks().insert(&new_task).await {
            Ok(id) => {
                tracing::info!(
                    backend = self.backend.label(),
                    task_id = %id,
                    user_id = %user_id,
                    "task created"
                );
                Ok(id)
            }
            Err(StoreError::MissingReference { .. }) => {
                Err(self.vanished_parent(user_id, project_id).await)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces a task's name, description and status.
    ///
    /// The status text is parsed before the task is looked up, so an unknown
    /// status is rejected even for an absent task. Editing an absent task is
    /// otherwise a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::BadRequest`] when the status is unknown.
    pub async fn edit(&self, id: TaskId, request: EditTaskRequest) -> TrackerResult<()> {
        let EditTaskRequest {
            name,
            description,
            status,
        } = request;
        let parsed = TaskStatus::try_from(status.as_str()).map_err(|err| {
            tracing::warn!(task_id = %id, %status, "rejected unknown task status");
            TrackerError::BadRequest(err.to_string())
        })?;

        if self.backend.tasks().find_by_id(id).await?.is_none() {
            tracing::debug!(task_id = %id, "edit of absent task ignored");
            return Ok(());
        }
        let changes = TaskChanges {
            name,
            description: normalize_description(description),
            status: parsed,
        };
        Ok(self.backend.tasks().update(id, &changes).await?)
    }

    /// Sets only the status of a task.
    ///
    /// Every transition between statuses is permitted. Changing the status
    /// of an absent task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn change_status(&self, id: TaskId, status: TaskStatus) -> TrackerResult<()> {
        if self.backend.tasks().find_by_id(id).await?.is_none() {
            tracing::debug!(task_id = %id, "status change of absent task ignored");
            return Ok(());
        }
        self.backend.tasks().update_status(id, status).await?;
        tracing::info!(task_id = %id, %status, "task status changed");
        Ok(())
    }

    /// Files a task under a project owned by the same user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the task or project does not
    /// exist, including a project removed while the assignment is written, and
    /// [`TrackerError::BadRequest`] when their owners differ.
    pub async fn assign_project(&self, task_id: TaskId, project_id: ProjectId) -> TrackerResult<()> {
        let task = require_task(&*self.backend, task_id).await?;
        let project = require_project(&*self.backend, project_id).await?;
        ensure_same_owner(task.user_id(), &project)?;
        self.backend
            .tasks()
            .update_project(task_id, project_id)
            .await
            .map_err(|err| match err {
                // The project vanished between the existence check and the write.
                StoreError::MissingReference { .. } => {
                    TrackerError::not_found(EntityKind::Project, project_id.value())
                }
                other => other.into(),
            })?;
        tracing::info!(task_id = %task_id, project_id = %project_id, "task assigned to project");
        Ok(())
    }

    /// Deletes a task. Deleting an absent task is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn delete(&self, id: TaskId) -> TrackerResult<()> {
        Ok(self.backend.tasks().delete(id).await?)
    }

    /// Resolves which parent disappeared after the pre-insert checks passed.
    async fn vanished_parent(&self, user_id: UserId, project_id: Option<ProjectId>) -> TrackerError {
        match (user_exists(&*self.backend, user_id).await, project_id) {
            (Ok(true), Some(pid)) => TrackerError::not_found(EntityKind::Project, pid.value()),
            (Ok(_), _) => TrackerError::not_found(EntityKind::User, user_id.value()),
            (Err(err), _) => err,
        }
    }
}

fn ensure_same_owner(user_id: UserId, project: &Project) -> TrackerResult<()> {
    if project.user_id() == user_id {
        return Ok(());
    }
    tracing::warn!(
        user_id = %user_id,
        project_id = %project.id(),
        owner_id = %project.user_id(),
        "rejected task and project with different owners"
    );
    Err(TrackerError::BadRequest(
        "task user and project user must be the same".to_owned(),
    ))
}
