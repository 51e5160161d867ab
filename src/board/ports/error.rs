//! Errors shared by every entity store.

use std::sync::Arc;
use thiserror::Error;

/// Result type for entity store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by entity store implementations.
///
/// Constraint violations are reported separately from generic persistence
/// failures so callers can translate them into domain conflicts.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation {
        /// Name of the violated constraint.
        constraint: String,
    },

    /// A foreign key referenced a row that does not exist.
    #[error("foreign key constraint violated: {constraint}")]
    MissingReference {
        /// Name of the violated constraint.
        constraint: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a uniqueness violation for the named constraint.
    pub fn unique_violation(constraint: impl Into<String>) -> Self {
        Self::UniqueViolation {
            constraint: constraint.into(),
        }
    }

    /// Builds a foreign key violation for the named constraint.
    pub fn missing_reference(constraint: impl Into<String>) -> Self {
        Self::MissingReference {
            constraint: constraint.into(),
        }
    }
}

/// Constraint name guarding unique user email addresses.
pub const USER_EMAIL_CONSTRAINT: &str = "users_email_key";

/// Constraint name guarding unique project names per owner.
pub const PROJECT_NAME_CONSTRAINT: &str = "projects_user_name_key";
