//! Store port for task rows.

use super::{NewTask, StoreResult, TaskChanges};
use crate::board::domain::{ProjectId, Task, TaskId, TaskStatus, UserId};
use async_trait::async_trait;

/// Task persistence contract.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>>;

    /// Returns every task ordered by identifier.
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Returns the tasks owned by the given user.
    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Task>>;

    /// Returns the tasks filed under the given project.
    async fn list_by_project(&self, project_id: ProjectId) -> StoreResult<Vec<Task>>;

    /// Inserts a task and returns the generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::MissingReference`] when the store
    /// enforces foreign keys and the user or project row is absent.
    async fn insert(&self, task: &NewTask) -> StoreResult<TaskId>;

    /// Replaces name, description and status of an existing task.
    async fn update(&self, id: TaskId, changes: &TaskChanges) -> StoreResult<()>;

    /// Replaces only the status of an existing task.
    async fn update_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<()>;

    /// Replaces only the project reference of an existing task.
    async fn update_project(&self, id: TaskId, project_id: ProjectId) -> StoreResult<()>;

    /// Deletes a task row. Deleting a missing row is not an error.
    async fn delete(&self, id: TaskId) -> StoreResult<()>;

    /// Deletes every task filed under the project and returns how many rows
    /// were removed.
    async fn delete_by_project(&self, project_id: ProjectId) -> StoreResult<usize>;

    /// Deletes every task owned by the user and returns how many rows were
    /// removed.
    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize>;
}
