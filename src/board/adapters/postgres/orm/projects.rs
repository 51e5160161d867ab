//! Diesel query-builder store for projects.
//!
//! Owner-scoped reads resolve the owning user row first and then follow the
//! `belongs_to` association, so an unknown owner yields an empty list.

use super::users::find_row as find_user_row;
use crate::board::{
    adapters::postgres::{
        models::{NewProjectRow, ProjectChangeset, ProjectRow},
        pool::{BlockingPool, classify},
        schema::projects,
    },
    domain::{Project, ProjectId, UserId},
    ports::{NewProject, ProjectChanges, ProjectStore, StoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// Project store built on the Diesel query DSL.
#[derive(Debug, Clone)]
pub struct OrmProjectStore {
    pool: BlockingPool,
}

impl OrmProjectStore {
    /// Creates a store over the given pool.
    #[must_use]
    pub const fn new(pool: BlockingPool) -> Self {
        Self { pool }
    }
}

/// Loads a project row, used by the task store for association lookups.
pub(super) fn find_row(connection: &mut PgConnection, id: i64) -> QueryResult<Option<ProjectRow>> {
    projects::table
        .find(id)
        .select(ProjectRow::as_select())
        .first::<ProjectRow>(connection)
        .optional()
}

#[async_trait]
impl ProjectStore for OrmProjectStore {
    async fn find_by_id(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        self.pool
            .run(move |connection| {
                let row = find_row(connection, id.value()).map_err(classify)?;
                Ok(row.map(Project::from))
            })
            .await
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        self.pool
            .run(move |connection| {
                let rows = projects::table
                    .order(projects::id.asc())
                    .select(ProjectRow::as_select())
                    .load::<ProjectRow>(connection)
                    .map_err(classify)?;
                Ok(rows.into_iter().map(Project::from).collect())
            })
            .await
    }

    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Project>> {
        self.pool
            .run(move |connection| {
                let Some(owner) = find_user_row(connection, user_id.value()).map_err(classify)?
                else {
                    return Ok(Vec::new());
                };
                let rows = ProjectRow::belonging_to(&owner)
                    .order(projects::id.asc())
                    .select(ProjectRow::as_select())
                    .load::<ProjectRow>(connection)
                    .map_err(classify)?;
                Ok(rows.into_iter().map(Project::from).collect())
            })
            .await
    }

    async fn insert(&self, project: &NewProject) -> StoreResult<ProjectId> {
        let new_project = project.clone();
        self.pool
            .run(move |connection| {
                let id = diesel::insert_into(projects::table)
                    .values(NewProjectRow::from(&new_project))
                    .returning(projects::id)
                    .get_result::<i64>(connection)
                    .map_err(classify)?;
                Ok(ProjectId::from_raw(id))
            })
            .await
    }

    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> StoreResult<()> {
        let owned_changes = changes.clone();
        self.pool
            .run(move |connection| {
                diesel::update(projects::table.find(id.value()))
                    .set(ProjectChangeset::from(&owned_changes))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: ProjectId) -> StoreResult<()> {
        self.pool
            .run(move |connection| {
                diesel::delete(projects::table.find(id.value()))
                    .execute(connection)
                    .map_err(classify)?;
                Ok(())
            })
            .await
    }

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize> {
        self.pool
            .run(move |connection| {
                diesel::delete(projects::table.filter(projects::user_id.eq(user_id.value())))
                    .execute(connection)
                    .map_err(classify)
            })
            .await
    }
}
