//! Storage strategy built from hand-written SQL statements.
//!
//! Every query is a literal statement executed through
//! [`diesel::sql_query`] with positional binds. Reference checks happen
//! inside the insert statements and children are removed by explicit
//! statements, so this strategy does not depend on declared cascades.

mod projects;
mod tasks;
mod users;

pub use projects::StatementProjectStore;
pub use tasks::StatementTaskStore;
pub use users::StatementUserStore;

use super::pool::{BlockingPool, BoardPgPool};
use crate::board::ports::{ProjectStore, StorageBackend, TaskStore, UserStore};

/// PostgreSQL backend using raw SQL statements.
#[derive(Debug, Clone)]
pub struct StatementBackend {
    users: StatementUserStore,
    projects: StatementProjectStore,
    tasks: StatementTaskStore,
}

impl StatementBackend {
    /// Creates the backend over a connection pool.
    #[must_use]
    pub fn new(pool: BoardPgPool) -> Self {
        let blocking = BlockingPool::new(pool);
        Self {
            users: StatementUserStore::new(blocking.clone()),
            projects: StatementProjectStore::new(blocking.clone()),
            tasks: StatementTaskStore::new(blocking),
        }
    }
}

impl StorageBackend for StatementBackend {
    fn label(&self) -> &'static str {
        "statement"
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
