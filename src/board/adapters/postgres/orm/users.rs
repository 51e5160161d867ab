//! Diesel query-builder store for users.

use crate::board::{
    adapters::postgres::{
        models::{NewUserRow, UserRow},
        pool::{BlockingPool, classify},
        schema::users,
    },
    domain::{User, UserId},
    ports::{NewUser, StoreResult, UserStore},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// User store built on the Diesel query DSL.
#[derive(Debug, Clone)]
pub struct OrmUserStore {
    pool: BlockingPool,
}

impl OrmUserStore {
    /// Creates a store over the given pool.
    #[must_use]
    pub const fn new(pool: BlockingPool) -> Self {
        Self { pool }
    }
}

/// Loads a user row, used by sibling stores for association lookups.
pub(super) fn find_row(connection: &mut PgConnection, id: i64) -> QueryResult<Option<UserRow>> {
    users::table
        .find(id)
        .select(UserRow::as_select())
        .first::<UserRow>(connection)
        .optional()
}

#[async_trait]
impl UserStore for OrmUserStore {
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        self.pool
            .run(move |connection| {
                let row = find_row(connection, id.value()).map_err(classify)?;
                Ok(row.map(User::from))
            })
            .await
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        self.pool
            .run(move |connection| {
                let rows = users::table
                    .order(users::id.asc())
                    .select(UserRow::as_select())
                    .load::<UserRow>(connection)
                    .map_err(classify)?;
                Ok(rows.into_iter().map(User::from).collect())
            })
            .await
    }

    async fn insert(&self, user: &NewUser) -> StoreResult<UserId> {
        let new_user = user.clone();
        self.pool
            .run(move |connection| {
                let id = diesel::insert_into(users::table)
                    .values(NewUserRow::from(&new_user))
                    .returning(users::id)
                    .get_result::<i64>(connection)
                    .map_err(classify)?;
                Ok(UserId::from_raw(id))
            })
            .await
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                // Owned projects and tasks go with the row via ON DELETE CASCADE.
                diesel::delete(users::table.find(id.value()))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }
}
