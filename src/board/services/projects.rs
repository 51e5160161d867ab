//! Project creation, editing and cascading removal.

use super::{
    AddProjectRequest, EditProjectRequest, EntityKind, TrackerError, TrackerResult,
    lookup::{normalize_description, require_project, require_user, user_exists},
};
use crate::board::{
    domain::{Project, ProjectId, UserId},
    ports::{NewProject, PROJECT_NAME_CONSTRAINT, ProjectChanges, StorageBackend, StoreError},
};
use mockable::Clock;
use std::sync::Arc;

/// Project orchestration service.
pub struct ProjectService<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    backend: Arc<B>,
    clock: Arc<C>,
}

impl<B, C> Clone for ProjectService<B, C>
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

impl<B, C> ProjectService<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a project service over the given backend and clock.
    #[must_use]
    pub const fn new(backend: Arc<B>, clock: Arc<C>) -> Self {
        Self { backend, clock }
    }

    /// Retrieves a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the project does not exist.
    pub async fn get(&self, id: ProjectId) -> TrackerResult<Project> {
        require_project(&*self.backend, id).await
    }

    /// Lists every project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn get_all(&self) -> TrackerResult<Vec<Project>> {
        Ok(self.backend.projects().list().await?)
    }

    /// Lists the projects owned by a user.
    ///
    /// An absent user yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn get_all_by_user(&self, user_id: UserId) -> TrackerResult<Vec<Project>> {
        if !user_exists(&*self.backend, user_id).await? {
            tracing::debug!(user_id = %user_id, "listing projects of absent user");
            return Ok(Vec::new());
        }
        Ok(self.backend.projects().list_by_user(user_id).await?)
    }

    /// Creates a project for an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the owner does not exist and
    /// [`TrackerError::Conflict`] when the owner already has a project with
    /// the same name.
    pub async fn add(&self, request: AddProjectRequest) -> TrackerResult<ProjectId> {
        let AddProjectRequest {
            user_id,
            name,
            description,
        } = request;
        require_user(&*self.backend, user_id).await?;

        let new_project = NewProject {
            user_id,
            name: name.clone(),
            description: normalize_description(description),
            created_at: self.clock.utc(),
        };
        match self.backend.projects().insert(&new_project).await {
            Ok(id) => {
                tracing::info!(
                    backend = self.backend.label(),
                    project_id = %id,
                    user_id = %user_id,
                    "project created"
                );
                Ok(id)
            }
            Err(err) => Err(Self::translate_write_error(err, user_id, &name)),
        }
    }

    /// Replaces a project's name and description.
    ///
    /// Editing an absent project is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Conflict`] when the new name collides with
    /// another project of the same owner.
    pub async fn edit(&self, id: ProjectId, request: EditProjectRequest) -> TrackerResult<()> {
        let Some(project) = self.backend.projects().find_by_id(id).await? else {
            tracing::debug!(project_id = %id, "edit of absent project ignored");
            return Ok(());
        };
        let EditProjectRequest { name, description } = request;
        let changes = ProjectChanges {
            name: name.clone(),
            description: normalize_description(description),
        };
        self.backend
            .projects()
            .update(id, &changes)
            .await
            .map_err(|err| Self::translate_write_error(err, project.user_id(), &name))
    }

    /// Deletes a project together with every task filed under it.
    ///
    /// Deleting an absent project is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when any delete fails.
    pub async fn delete(&self, id: ProjectId) -> TrackerResult<()> {
        if self.backend.projects().find_by_id(id).await?.is_none() {
            tracing::debug!(project_id = %id, "delete of absent project ignored");
            return Ok(());
        }
        let tasks = self.backend.tasks().delete_by_project(id).await?;
        self.backend.projects().delete(id).await?;
        tracing::info!(
            backend = self.backend.label(),
            project_id = %id,
            tasks,
            "project deleted with filed tasks"
        );
        Ok(())
    }

    fn translate_write_error(err: StoreError, user_id: UserId, name: &str) -> TrackerError {
        match err {
            StoreError::UniqueViolation { constraint } if constraint == PROJECT_NAME_CONSTRAINT => {
                tracing::warn!(user_id = %user_id, name, "rejected duplicate project name");
                TrackerError::Conflict(format!(
                    "Project with name {name} already exists for user {user_id}"
                ))
            }
            // The owner vanished between the existence check and the write.
            StoreError::MissingReference { .. } => {
                TrackerError::not_found(EntityKind::User, user_id.value())
            }
            other => other.into(),
        }
    }
}
