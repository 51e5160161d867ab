//! Storage strategy built on the Diesel query DSL.
//!
//! Rows are mapped through `Selectable`/`Insertable`/`AsChangeset` models and
//! owner-scoped reads follow `belongs_to` associations. Referential checks
//! are left to the declared foreign keys, whose `ON DELETE CASCADE` rules
//! also remove dependants when a parent row is deleted.

mod projects;
mod tasks;
mod users;

pub use projects::OrmProjectStore;
pub use tasks::OrmTaskStore;
pub use users::OrmUserStore;

use super::pool::{BlockingPool, BoardPgPool};
use crate::board::ports::{ProjectStore, StorageBackend, TaskStore, UserStore};

/// PostgreSQL backend using the Diesel query builder.
#[derive(Debug, Clone)]
pub struct OrmBackend {
    users: OrmUserStore,
    projects: OrmProjectStore,
    tasks: OrmTaskStore,
}

impl OrmBackend {
    /// Creates the backend over a connection pool.
    #[must_use]
    pub fn new(pool: BoardPgPool) -> Self {
        let blocking = BlockingPool::new(pool);
        Self {
            users: OrmUserStore::new(blocking.clone()),
            projects: OrmProjectStore::new(blocking.clone()),
            tasks: OrmTaskStore::new(blocking),
        }
    }
}

impl StorageBackend for OrmBackend {
    fn label(&self) -> &'static str {
        "orm"
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
