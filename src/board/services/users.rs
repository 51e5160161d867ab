//! User registration, lookup and cascading removal.

use super::{
    AddUserRequest, TrackerError, TrackerResult,
    lookup::{require_user, user_exists},
};
use crate::board::{
    domain::{User, UserId},
    ports::{NewUser, StorageBackend, StoreError, USER_EMAIL_CONSTRAINT},
};
use std::sync::Arc;

/// User orchestration service.
pub struct UserService<B>
where
    B: StorageBackend + ?Sized,
{
    backend: Arc<B>,
}

impl<B> Clone for UserService<B>
where
    B: StorageBackend + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> UserService<B>
where
    B: StorageBackend + ?Sized,
{
    /// Creates a user service over the given backend.
    #[must_use]
    pub const fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Retrieves a user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the user does not exist.
    pub async fn get(&self, id: UserId) -> TrackerResult<User> {
        require_user(&*self.backend, id).await
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when the store fails.
    pub async fn get_all(&self) -> TrackerResult<Vec<User>> {
        Ok(self.backend.users().list().await?)
    }

    /// Registers a user and returns the generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Conflict`] when the email is already taken.
    pub async fn add(&self, request: AddUserRequest) -> TrackerResult<UserId> {
        let AddUserRequest { name, email } = request;
        let new_user = NewUser {
            name,
            email: email.clone(),
        };
        match self.backend.users().insert(&new_user).await {
            Ok(id) => {
                tracing::info!(backend = self.backend.label(), user_id = %id, "user created");
                Ok(id)
            }
            Err(StoreError::UniqueViolation { constraint })
                if constraint == USER_EMAIL_CONSTRAINT =>
            {
                tracing::warn!(%email, "rejected duplicate user email");
                Err(TrackerError::Conflict(format!(
                    "User with email {email} already exists"
                )))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a user together with every project and task it owns.
    ///
    /// Tasks go first, then projects, then the user row. Deleting an absent
    /// user is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Storage`] when any delete fails; rows removed
    /// before the failure stay removed.
    pub async fn delete(&self, id: UserId) -> TrackerResult<()> {
        if !user_exists(&*self.backend, id).await? {
            tracing::debug!(user_id = %id, "delete of absent user ignored");
            return Ok(());
        }
        let tasks = self.backend.tasks().delete_by_user(id).await?;
        let projects = self.backend.projects().delete_by_user(id).await?;
        self.backend.users().delete(id).await?;
        tracing::info!(
            backend = self.backend.label(),
            user_id = %id,
            tasks,
            projects,
            "user deleted with owned projects and tasks"
        );
        Ok(())
    }
}
