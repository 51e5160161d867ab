//! Hand-written SQL for task rows.
//!
//! Like the project statements, the insert checks its references inline:
//! the owner must exist and, when given, so must the project.

use crate::board::{
    adapters::postgres::{
        models::{GeneratedId, TaskRow, rows_to_tasks},
        pool::{BlockingPool, classify},
    },
    domain::{ProjectId, Task, TaskId, TaskStatus, UserId},
    ports::{NewTask, StoreError, StoreResult, TaskChanges, TaskStore},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text, Timestamptz, Varchar};

const SELECT_ALL: &str = concat!(
    "SELECT id, user_id, project_id, name, description, status, created_at ",
    "FROM tasks ORDER BY id",
);
const SELECT_BY_ID: &str = concat!(
    "SELECT id, user_id, project_id, name, description, status, created_at ",
    "FROM tasks WHERE id = $1",
);
const SELECT_BY_USER: &str = concat!(
    "SELECT id, user_id, project_id, name, description, status, created_at ",
    "FROM tasks WHERE user_id = $1 ORDER BY id",
);
const SELECT_BY_PROJECT: &str = concat!(
    "SELECT id, user_id, project_id, name, description, status, created_at ",
    "FROM tasks WHERE project_id = $1 ORDER BY id",
);
const INSERT: &str = concat!(
    "INSERT INTO tasks (user_id, project_id, name, description, status, created_at) ",
    "SELECT $1, $2, $3, $4, $5, $6 ",
    "WHERE EXISTS (SELECT 1 FROM users WHERE id = $1) ",
    "AND ($2 IS NULL OR EXISTS (SELECT 1 FROM projects WHERE id = $2)) ",
    "RETURNING id",
);
const UPDATE: &str = "UPDATE tasks SET name = $1, description = $2, status = $3 WHERE id = $4";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = $1 WHERE id = $2";
const UPDATE_PROJECT: &str = "UPDATE tasks SET project_id = $1 WHERE id = $2";
const DELETE: &str = "DELETE FROM tasks WHERE id = $1";
const DELETE_BY_PROJECT: &str = "DELETE FROM tasks WHERE project_id = $1";
const DELETE_BY_USER: &str = "DELETE FROM tasks WHERE user_id = $1";

/// Constraint name reported when the reference check inside `INSERT` fails.
const REFERENCE_CHECK: &str = "tasks_reference_check";

/// Task store issuing raw SQL statements.
#[derive(Debug, Clone)]
pub struct StatementTaskStore {
    pool: BlockingPool,
}

impl StatementTaskStore {
    /// Creates a store over the given pool.
    #[must_use]
    pub const fn new(pool: BlockingPool) -> Self {
        Self { pool }
    }

    async fn load_where(&self, sql: &'static str, key: i64) -> StoreResult<Vec<Task>> {
        self.pool
            .run(move |connection| {
                let rows = diesel::sql_query(sql)
                    .bind::<BigInt, _>(key)
                    .load::<TaskRow>(connection)
                    .map_err(classify)?;
                rows_to_tasks(rows)
            })
            .await
    }

    async fn execute_keyed(&self, sql: &'static str, key: i64) -> StoreResult<usize> {
        self.pool
            .run(move |connection| {
                diesel::sql_query(sql)
                    .bind::<BigInt, _>(key)
                    .execute(connection)
                    .map_err(classify)
            })
            .await
    }
}

#[async_trait]
impl TaskStore for StatementTaskStore {
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        self.pool
            .run(move |connection| {
                let row = diesel::sql_query(SELECT_BY_ID)
                    .bind::<BigInt, _>(id.value())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(classify)?;
                row.map(Task::try_from).transpose()
            })
            .await
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        self.pool
            .run(move |connection| {
                let rows = diesel::sql_query(SELECT_ALL)
                    .load::<TaskRow>(connection)
                    .map_err(classify)?;
                rows_to_tasks(rows)
            })
            .await
    }

    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Task>> {
        self.load_where(SELECT_BY_USER, user_id.value()).await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> StoreResult<Vec<Task>> {
        self.load_where(SELECT_BY_PROJECT, project_id.value()).await
    }

    async fn insert(&self, task: &NewTask) -> StoreResult<TaskId> {
        let NewTask {
            user_id,
            project_id,
            name,
            description,
            status,
            created_at,
        } = task.clone();
        self.pool
            .run(move |connection| {
                let generated = diesel::sql_query(INSERT)
                    .bind::<BigInt, _>(user_id.value())
                    .bind::<Nullable<BigInt>, _>(project_id.map(ProjectId::value))
                    .bind::<Varchar, _>(name.as_str())
                    .bind::<Nullable<Text>, _>(description.as_deref())
                    .bind::<Varchar, _>(status.as_str())
                    .bind::<Timestamptz, _>(created_at)
                    .get_result::<GeneratedId>(connection)
                    .optional()
                    .map_err(classify)?;
                generated
                    .map(|row| TaskId::from_raw(row.id))
                    .ok_or_else(|| StoreError::missing_reference(REFERENCE_CHECK))
            })
            .await
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> StoreResult<()> {
        let TaskChanges {
            name,
            description,
            status,
        } = changes.clone();
        self.pool
            .run(move |connection| {
                diesel::sql_query(UPDATE)
                    .bind::<Varchar, _>(name.as_str())
                    .bind::<Nullable<Text>, _>(description.as_deref())
                    .bind::<Varchar, _>(status.as_str())
                    .bind::<BigInt, _>(id.value())
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::sql_query(UPDATE_STATUS)
                    .bind::<Varchar, _>(status.as_str())
                    .bind::<BigInt, _>(id.value())
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn update_project(&self, id: TaskId, project_id: ProjectId) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::sql_query(UPDATE_PROJECT)
                    .bind::<BigInt, _>(project_id.value())
                    .bind::<BigInt, _>(id.value())
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        self.execute_keyed(DELETE, id.value()).await?;
        Ok(())
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> StoreResult<usize> {
        self.execute_keyed(DELETE_BY_PROJECT, project_id.value()).await
    }

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize> {
        self.execute_keyed(DELETE_BY_USER, user_id.value()).await
    }
}
