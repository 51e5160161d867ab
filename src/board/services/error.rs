//! Error taxonomy surfaced by board services.

use crate::board::ports::StoreError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Entity named in a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    /// A user.
    User,
    /// A project.
    Project,
    /// A task.
    Task,
}

impl EntityKind {
    /// Returns the entity name used in messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Project => "Project",
            Self::Task => "Task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse error category, one per transport status family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced entity is absent where existence is a precondition.
    NotFound,
    /// A uniqueness rule rejected the write.
    Conflict,
    /// A domain value or relationship was malformed or disallowed.
    BadRequest,
    /// The store failed for reasons unrelated to domain rules.
    StorageFailure,
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A referenced entity does not exist.
    #[error("{entity} not found with id: {id}")]
    NotFound {
        /// Kind of the missing entity.
        entity: EntityKind,
        /// Identifier that failed to resolve.
        id: i64,
    },

    /// A uniqueness rule rejected the write.
    #[error("{0}")]
    Conflict(String),

    /// A domain value or relationship was rejected.
    #[error("{0}")]
    BadRequest(String),

    /// The store failed. The message stays generic; the cause is kept as the
    /// error source.
    #[error("internal storage error")]
    Storage(#[source] StoreError),
}

/// Result type for board service operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// Builds a not-found error for the given entity.
    #[must_use]
    pub const fn not_found(entity: EntityKind, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Storage(_) => ErrorKind::StorageFailure,
        }
    }

    /// Returns the HTTP status a request layer should answer with.
    ///
    /// Conflicts answer 400 like other rejected input.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict | ErrorKind::BadRequest => 400,
            ErrorKind::StorageFailure => 500,
        }
    }

    /// Renders the error as a response body stamped with the clock's time.
    #[must_use]
    pub fn to_body(&self, clock: &impl Clock) -> ErrorBody {
        let status = self.status_code();
        ErrorBody {
            timestamp: clock.utc(),
            status,
            error: reason_phrase(status),
            message: self.to_string(),
        }
    }
}

impl From<StoreError> for TrackerError {
    /// Context-free translation used where no constraint violation is
    /// expected. Call sites that can hit a constraint map it themselves.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { constraint } => {
                Self::Conflict(format!("record conflicts with existing data ({constraint})"))
            }
            StoreError::MissingReference { constraint } => {
                Self::BadRequest(format!("referenced record does not exist ({constraint})"))
            }
            StoreError::Persistence(_) => {
                tracing::error!(error = %err, "storage operation failed");
                Self::Storage(err)
            }
        }
    }
}

/// Serialisable error payload mirroring the service's status mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Time the error was rendered.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase.
    pub error: &'static str,
    /// Human-readable message.
    pub message: String,
}

const fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}
