//! In-memory stores for board tests and embedding.
//!
//! Rows live in ordered maps behind `RwLock`s. Uniqueness constraints are
//! checked on write; foreign keys are not, so referential integrity rests
//! entirely on the services.

mod projects;
mod tasks;
mod users;

pub use projects::InMemoryProjectStore;
pub use tasks::InMemoryTaskStore;
pub use users::InMemoryUserStore;

use crate::board::ports::{ProjectStore, StorageBackend, StoreError, TaskStore, UserStore};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Storage backend keeping every row in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    users: InMemoryUserStore,
    projects: InMemoryProjectStore,
    tasks: InMemoryTaskStore,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for InMemoryBackend {
    fn label(&self) -> &'static str {
        "memory"
    }

    fn users(&self) -> &dyn UserStore {
        &self.users
    }

    fn projects(&self) -> &dyn ProjectStore {
        &self.projects
    }

    fn tasks(&self) -> &dyn TaskStore {
        &self.tasks
    }
}

fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
    lock.read()
        .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
}

fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
    lock.write()
        .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
}
