//! Diesel query-builder store for tasks.

use super::{projects::find_row as find_project_row, users::find_row as find_user_row};
use crate::board::{
    adapters::postgres::{
        models::{NewTaskRow, TaskChangeset, TaskRow, rows_to_tasks},
        pool::{BlockingPool, classify},
        schema::tasks,
    },
    domain::{ProjectId, Task, TaskId, TaskStatus, UserId},
    ports::{NewTask, StoreResult, TaskChanges, TaskStore},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// Task store built on the Diesel query DSL.
#[derive(Debug, Clone)]
pub struct OrmTaskStore {
    pool: BlockingPool,
}

impl OrmTaskStore {
    /// Creates a store over the given pool.
    #[must_use]
    pub const fn new(pool: BlockingPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for OrmTaskStore {
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        self.pool
            .run(move |connection| {
                let row = tasks::table
                    .find(id.value())
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
                    .map_err(classify)?;
                row.map(Task::try_from).transpose()
            })
            .await
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        self.pool
            .run(move |connection| {
                let rows = tasks::table
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(classify)?;
                rows_to_tasks(rows)
            })
            .await
    }

    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Task>> {
        self.pool
            .run(move |connection| {
                let Some(owner) = find_user_row(connection, user_id.value()).map_err(classify)?
                else {
                    return Ok(Vec::new());
                };
                let rows = TaskRow::belonging_to(&owner)
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(classify)?;
                rows_to_tasks(rows)
            })
            .await
    }

    async fn list_by_project(&self, project_id: ProjectId) -> StoreResult<Vec<Task>> {
        self.pool
            .run(move |connection| {
                let Some(project) =
                    find_project_row(connection, project_id.value()).map_err(classify)?
                else {
                    return Ok(Vec::new());
                };
                let rows = TaskRow::belonging_to(&project)
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(classify)?;
                rows_to_tasks(rows)
            })
            .await
    }

    async fn insert(&self, task: &NewTask) -> StoreResult<TaskId> {
        let new_task = task.clone();
        self.pool
            .run(move |connection| {
                // Missing users or projects surface as foreign key violations.
                let id = diesel::insert_into(tasks::table)
                    .values(NewTaskRow::from(&new_task))
                    .returning(tasks::id)
                    .get_result::<i64>(connection)
                    .map_err(classify)?;
                Ok(TaskId::from_raw(id))
            })
            .await
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> StoreResult<()> {
        let owned_changes = changes.clone();
        self.pool
            .run(move |connection| {
                diesel::update(tasks::table.find(id.value()))
                    .set(TaskChangeset::from(&owned_changes))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::update(tasks::table.find(id.value()))
                    .set(tasks::status.eq(status.as_str()))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn update_project(&self, id: TaskId, project_id: ProjectId) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::update(tasks::table.find(id.value()))
                    .set(tasks::project_id.eq(Some(project_id.value())))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::delete(tasks::table.find(id.value()))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> StoreResult<usize> {
        self.pool
            .run(move |connection| {
                diesel::delete(tasks::table.filter(tasks::project_id.eq(project_id.value())))
                    .execute(connection)
                    .map_err(classify)
            })
            .await
    }

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize> {
        self.pool
            .run(move |connection| {
                diesel::delete(tasks::table.filter(tasks::user_id.eq(user_id.value())))
                    .execute(connection)
                    .map_err(classify)
            })
            .await
    }
}
