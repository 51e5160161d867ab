//! Store port for project rows.

use super::{NewProject, ProjectChanges, StoreResult};
use crate::board::domain::{Project, ProjectId, UserId};
use async_trait::async_trait;

/// Project persistence contract.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> StoreResult<Option<Project>>;

    /// Returns every project ordered by identifier.
    async fn list(&self) -> StoreResult<Vec<Project>>;

    /// Returns the projects owned by the given user.
    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Project>>;

    /// Inserts a project and returns the generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::UniqueViolation`] when the owner already
    /// has a project with the same name, or
    /// [`super::StoreError::MissingReference`] when the owner row is absent
    /// and the store enforces foreign keys.
    async fn insert(&self, project: &NewProject) -> StoreResult<ProjectId>;

    /// Replaces the name and description of an existing project.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::UniqueViolation`] when the new name
    /// collides with another project of the same owner.
    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> StoreResult<()>;

    /// Deletes a project row. Deleting a missing row is not an error.
    async fn delete(&self, id: ProjectId) -> StoreResult<()>;

    /// Deletes every project owned by the user and returns how many rows
    /// were removed.
    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize>;
}
