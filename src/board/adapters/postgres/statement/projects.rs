//! Hand-written SQL for project rows.
//!
//! Inserts verify the owner inside the statement itself, so a missing user is
//! reported even on a database without foreign keys.

use crate::board::{
    adapters::postgres::{
        models::{GeneratedId, ProjectRow},
        pool::{BlockingPool, classify},
    },
    domain::{Project, ProjectId, UserId},
    ports::{NewProject, ProjectChanges, ProjectStore, StoreError, StoreResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text, Timestamptz, Varchar};

const SELECT_ALL: &str =
    "SELECT id, user_id, name, description, created_at FROM projects ORDER BY id";
const SELECT_BY_ID: &str =
    "SELECT id, user_id, name, description, created_at FROM projects WHERE id = $1";
const SELECT_BY_USER: &str = concat!(
    "SELECT id, user_id, name, description, created_at FROM projects ",
    "WHERE user_id = $1 ORDER BY id",
);

const INSERT: &str = concat!(
    "INSERT INTO projects (user_id, name, description, created_at) ",
    "SELECT $1, $2, $3, $4 ",
    "WHERE EXISTS (SELECT 1 FROM users WHERE id = $1) ",
    "RETURNING id",
);
const UPDATE: &str = "UPDATE projects SET name = $1, description = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM projects WHERE id = $1";
const DELETE_BY_USER: &str = "DELETE FROM projects WHERE user_id = $1";

/// Constraint name reported when the owner check inside `INSERT` fails.
const OWNER_CHECK: &str = "projects_user_id_fkey";

/// Project store issuing raw SQL statements.
#[derive(Debug, Clone)]
pub struct StatementProjectStore {
    pool: BlockingPool,
}

impl StatementProjectStore {
    /// Creates a store over the given pool.
    #[must_use]
    pub const fn new(pool: BlockingPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for StatementProjectStore {
    async fn find_by_id(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        self.pool
            .run(move |connection| {
                let row = diesel::sql_query(SELECT_BY_ID)
                    .bind::<BigInt, _>(id.value())
                    .get_result::<ProjectRow>(connection)
                    .optional()
                    .map_err(classify)?;
                Ok(row.map(Project::from))
            })
            .await
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        self.pool
            .run(move |connection| {
                let rows = diesel::sql_query(SELECT_ALL)
                    .load::<ProjectRow>(connection)
                    .map_err(classify)?;
                Ok(rows.into_iter().map(Project::from).collect())
            })
            .await
    }

    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Project>> {
        self.pool
            .run(move |connection| {
                let rows = diesel::sql_query(SELECT_BY_USER)
                    .bind::<BigInt, _>(user_id.value())
                    .load::<ProjectRow>(connection)
                    .map_err(classify)?;
                Ok(rows.into_iter().map(Project::from).collect())
            })
            .await
    }

    async fn insert(&self, project: &NewProject) -> StoreResult<ProjectId> {
        let NewProject {
            user_id,
            name,
            description,
            created_at,
        } = project.clone();
        self.pool
            .run(move |connection| {
                let generated = diesel::sql_query(INSERT)
                    .bind::<BigInt, _>(user_id.value())
                    .bind::<Varchar, _>(name.as_str())
                    .bind::<Nullable<Text>, _>(description.as_deref())
                    .bind::<Timestamptz, _>(created_at)
                    .get_result::<GeneratedId>(connection)
                    .optional()
                    .map_err(classify)?;
                generated
                    .map(|row| ProjectId::from_raw(row.id))
                    .ok_or_else(|| StoreError::missing_reference(OWNER_CHECK))
            })
            .await
    }

    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> StoreResult<()> {
        let ProjectChanges { name, description } = changes.clone();
        self.pool
            .run(move |connection| {
                diesel::sql_query(UPDATE)
                    .bind::<Varchar, _>(name.as_str())
                    .bind::<Nullable<Text>, _>(description.as_deref())
                    .bind::<BigInt, _>(id.value())
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: ProjectId) -> StoreResult<()> {
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

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize> {
        self.pool
            .run(move |connection| {
                diesel::sql_query(DELETE_BY_USER)
                    .bind::<BigInt, _>(user_id.value())
                    .execute(connection)
                    .map_err(classify)
            })
            .await
    }
}
