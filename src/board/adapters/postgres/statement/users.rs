//! Hand-written SQL for user rows.

use crate::board::{
    adapters::postgres::{
        models::{GeneratedId, UserRow},
        pool::{BlockingPool, classify},
    },
    domain::{User, UserId},
    ports::{NewUser, StoreResult, UserStore},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Varchar};

const SELECT_ALL: &str = "SELECT id, name, email FROM users ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = $1";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

/// User store issuing raw SQL statements.
#[derive(Debug, Clone)]
pub struct StatementUserStore {
    pool: BlockingPool,
}

impl StatementUserStore {
    /// Creates a store over the given pool.
    #[must_use]
    pub const fn new(pool: BlockingPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for StatementUserStore {
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        self.pool
            .run(move |connection| {
                let row = diesel::sql_query(SELECT_BY_ID)
                    .bind::<BigInt, _>(id.value())
                    .get_result::<UserRow>(connection)
                    .optional()
                    .map_err(classify)?;
                Ok(row.map(User::from))
            })
            .await
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        self.pool
            .run(move |connection| {
                let rows = diesel::sql_query(SELECT_ALL)
                    .load::<UserRow>(connection)
                    .map_err(classify)?;
                Ok(rows.into_iter().map(User::from).collect())
            })
            .await
    }

    async fn insert(&self, user: &NewUser) -> StoreResult<UserId> {
        let NewUser { name, email } = user.clone();
        self.pool
            .run(move |connection| {
                let generated = diesel::sql_query(INSERT)
                    .bind::<Varchar, _>(name.as_str())
                    .bind::<Varchar, _>(email.as_str())
                    .get_result::<GeneratedId>(connection)
                    .map_err(classify)?;
                Ok(UserId::from_raw(generated.id))
            })
            .await
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::sql_query(DELETE)
                    .bind::<BigInt, _>(id.value())
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }
}
