//! Connection pooling and error classification shared by the PostgreSQL
//! stores.

use crate::board::ports::{StoreError, StoreResult};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs Diesel work on the blocking thread pool with a pooled connection.
#[derive(Debug, Clone)]
pub struct BlockingPool {
    pool: BoardPgPool,
}

impl BlockingPool {
    /// Wraps a connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    /// Checks out a connection and runs `f` on it off the async executor.
    pub async fn run<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(StoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(StoreError::persistence)?
    }
}

/// Translates a Diesel error into the store error taxonomy.
///
/// Constraint violations keep the constraint name reported by `PostgreSQL`
/// so services can tell a duplicate email from a duplicate project name.
pub fn classify(err: DieselError) -> StoreError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
            StoreError::unique_violation(info.constraint_name().unwrap_or("unique"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info) => {
            StoreError::missing_reference(info.constraint_name().unwrap_or("foreign_key"))
        }
        _ => StoreError::persistence(err),
    }
}

