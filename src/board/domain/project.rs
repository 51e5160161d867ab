//! Project entity.

use super::{ProjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named project owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    user_id: UserId,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a stored project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Stored project identifier.
    pub id: ProjectId,
    /// Owning user.
    pub user_id: UserId,
    /// Project name, unique per owner.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Reconstructs a project from stored values.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
