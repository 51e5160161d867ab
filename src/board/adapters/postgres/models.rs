//! Diesel row models and their translation into board domain shapes.
//!
//! The same row types serve both PostgreSQL strategies: the statement store
//! loads them through `QueryableByName`, the ORM store through `Selectable`
//! and association lookups.

use super::schema::{projects, tasks, users};
use crate::board::{
    domain::{
        PersistedProjectData, PersistedTaskData, Project, ProjectId, Task, TaskId, TaskStatus,
        User, UserId,
    },
    ports::{NewProject, NewTask, NewUser, ProjectChanges, StoreError, TaskChanges},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for users.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable, Identifiable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Generated user identifier.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub id: i64,
    /// Display name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Unique email address.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub email: String,
}

/// Query result row for projects.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable, Identifiable, Associations)]
#[diesel(table_name = projects)]
#[diesel(belongs_to(UserRow, foreign_key = user_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Generated project identifier.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub id: i64,
    /// Owning user.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub user_id: i64,
    /// Project name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Optional description.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub description: Option<String>,
    /// Insertion timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Query result row for tasks.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable, Identifiable, Associations)]
#[diesel(table_name = tasks)]
#[diesel(belongs_to(UserRow, foreign_key = user_id))]
#[diesel(belongs_to(ProjectRow, foreign_key = project_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Generated task identifier.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub id: i64,
    /// Owning user.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub user_id: i64,
    /// Optional project reference.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Int8>)]
    pub project_id: Option<i64>,
    /// Task name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Optional description.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub description: Option<String>,
    /// Status in storage representation.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Insertion timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
}

/// Identifier returned by `INSERT ... RETURNING id`.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub struct GeneratedId {
    /// Generated identifier.
    #[diesel(sql_type = diesel::sql_types::Int8)]
    pub id: i64,
}

/// Insert model for users.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    /// Display name.
    pub name: &'a str,
    /// Unique email address.
    pub email: &'a str,
}

/// Insert model for projects.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow<'a> {
    /// Owning user.
    pub user_id: i64,
    /// Project name.
    pub name: &'a str,
    /// Optional description.
    pub description: Option<&'a str>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for tasks.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow<'a> {
    /// Owning user.
    pub user_id: i64,
    /// Optional project reference.
    pub project_id: Option<i64>,
    /// Task name.
    pub name: &'a str,
    /// Optional description.
    pub description: Option<&'a str>,
    /// Status in storage representation.
    pub status: &'a str,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset for project edits. `None` clears the description.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
#[diesel(treat_none_as_null = true)]
pub struct ProjectChangeset<'a> {
    /// Replacement name.
    pub name: &'a str,
    /// Replacement description.
    pub description: Option<&'a str>,
}

/// Changeset for full task edits. `None` clears the description.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset<'a> {
    /// Replacement name.
    pub name: &'a str,
    /// Replacement description.
    pub description: Option<&'a str>,
    /// Replacement status.
    pub status: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
        }
    }
}

impl<'a> From<&'a NewProject> for NewProjectRow<'a> {
    fn from(project: &'a NewProject) -> Self {
        Self {
            user_id: project.user_id.value(),
            name: &project.name,
            description: project.description.as_deref(),
            created_at: project.created_at,
        }
    }
}

impl<'a> From<&'a NewTask> for NewTaskRow<'a> {
    fn from(task: &'a NewTask) -> Self {
        Self {
            user_id: task.user_id.value(),
            project_id: task.project_id.map(ProjectId::value),
            name: &task.name,
            description: task.description.as_deref(),
            status: task.status.as_str(),
            created_at: task.created_at,
        }
    }
}

impl<'a> From<&'a ProjectChanges> for ProjectChangeset<'a> {
    fn from(changes: &'a ProjectChanges) -> Self {
        Self {
            name: &changes.name,
            description: changes.description.as_deref(),
        }
    }
}

impl<'a> From<&'a TaskChanges> for TaskChangeset<'a> {
    fn from(changes: &'a TaskChanges) -> Self {
        Self {
            name: &changes.name,
            description: changes.description.as_deref(),
            status: changes.status.as_str(),
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(UserId::from_raw(row.id), row.name, row.email)
    }
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self::from_persisted(PersistedProjectData {
            id: ProjectId::from_raw(row.id),
            user_id: UserId::from_raw(row.user_id),
            name: row.name,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

impl TryFrom<TaskRow> for Task {
    type Error = StoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(row.status.as_str()).map_err(StoreError::persistence)?;
        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::from_raw(row.id),
            user_id: UserId::from_raw(row.user_id),
            project_id: row.project_id.map(ProjectId::from_raw),
            name: row.name,
            description: row.description,
            status,
            created_at: row.created_at,
        }))
    }
}

/// Maps loaded task rows, failing on the first unreadable status.
pub fn rows_to_tasks(rows: Vec<TaskRow>) -> Result<Vec<Task>, StoreError> {
    rows.into_iter().map(Task::try_from).collect()
}
