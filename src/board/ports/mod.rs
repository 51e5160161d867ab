//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.
//! Every backend implements the same three stores; services never learn
//! which backend is active.

mod backend;
mod error;
mod projects;
mod records;
mod tasks;
mod users;

pub use backend::StorageBackend;
pub use error::{PROJECT_NAME_CONSTRAINT, StoreError, StoreResult, USER_EMAIL_CONSTRAINT};
pub use projects::ProjectStore;
pub use records::{NewProject, NewTask, NewUser, ProjectChanges, TaskChanges};
pub use tasks::TaskStore;
pub use users::UserStore;
