//! Facade bundling the three services over one backend.

use super::{ProjectService, TaskService, UserService};
use crate::board::ports::StorageBackend;
use mockable::Clock;
use std::sync::Arc;

/// Entry point for every board operation.
///
/// All three services share the same backend and clock, so a cascade started
/// from one service is visible to the others immediately.
pub struct Tracker<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    users: UserService<B>,
    projects: ProjectService<B, C>,
    tasks: TaskService<B, C>,
}

impl<B, C> Clone for Tracker<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            projects: self.projects.clone(),
            tasks: self.tasks.clone(),
        }
    }
}

impl<B, C> Tracker<B, C>
where
    B: StorageBackend + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a tracker over the given backend and clock.
    #[must_use]
    pub fn new(backend: Arc<B>, clock: Arc<C>) -> Self {
        Self {
            users: UserService::new(Arc::clone(&backend)),
            projects: ProjectService::new(Arc::clone(&backend), Arc::clone(&clock)),
            tasks: TaskService::new(backend, clock),
        }
    }

    /// Returns the user service.
    #[must_use]
    pub const fn users(&self) -> &UserService<B> {
        &self.users
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService<B, C> {
        &self.projects
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService<B, C> {
        &self.tasks
    }
}
