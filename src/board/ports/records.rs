//! Insert and update records passed to entity stores.
//!
//! Identifiers are absent from the insert records: every store generates
//! them and returns the new value from `insert`.

use crate::board::domain::{ProjectId, TaskStatus, UserId};
use chrono::{DateTime, Utc};

/// Values for a user row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address, unique across users.
    pub email: String,
}

/// Values for a project row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Owning user.
    pub user_id: UserId,
    /// Project name, unique per owner.
    pub name: String,
    /// Optional description, stored as `NULL` when absent.
    pub description: Option<String>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Mutable project columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChanges {
    /// Replacement name.
    pub name: String,
    /// Replacement description.
    pub description: Option<String>,
}

/// Values for a task row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning user.
    pub user_id: UserId,
    /// Project the task is filed under, if any.
    pub project_id: Option<ProjectId>,
    /// Task name.
    pub name: String,
    /// Optional description, stored as `NULL` when absent.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Task columns replaced by a full edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement name.
    pub name: String,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: TaskStatus,
}
