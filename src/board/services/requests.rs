//! Request payloads accepted by board services.
//!
//! Requests deserialize from the same JSON shapes a transport layer would
//! receive, so handlers can pass decoded bodies straight through.

use crate::board::domain::{ProjectId, UserId};
use serde::Deserialize;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddUserRequest {
    pub(super) name: String,
    pub(super) email: String,
}

impl AddUserRequest {
    /// Creates a request with the user's name and email.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddProjectRequest {
    pub(super) user_id: UserId,
    pub(super) name: String,
    pub(super) description: Option<String>,
}

impl AddProjectRequest {
    /// Creates a request for a project owned by `user_id`.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload replacing a project's name and description.
///
/// The owner cannot be changed through an edit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditProjectRequest {
    pub(super) name: String,
    pub(super) description: Option<String>,
}

impl EditProjectRequest {
    /// Creates an edit that sets the name and clears the description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddTaskRequest {
    pub(super) user_id: UserId,
    pub(super) project_id: Option<ProjectId>,
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) status: Option<String>,
}

impl AddTaskRequest {
    /// Creates a request for a task owned by `user_id`.
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            project_id: None,
            name: name.into(),
            description: None,
            status: None,
        }
    }

    /// Files the task under a project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Records a caller-supplied status.
    ///
    /// New tasks always start as `NEW`; the value is accepted for payload
    /// compatibility and otherwise ignored.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Request payload replacing a task's name, description and status.
///
/// The status is free-form text parsed by the service, so an unknown value
/// surfaces as a bad request rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditTaskRequest {
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) status: String,
}

impl EditTaskRequest {
    /// Creates an edit with the replacement name and status text.
    #[must_use]
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: status.into(),
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
