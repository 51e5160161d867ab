//! Domain model for users, projects and tasks.
//!
//! These are the shapes every storage backend maps its rows into. They carry
//! no infrastructure dependencies and are serialisable via serde.

mod error;
mod ids;
mod project;
mod task;
mod user;

pub use error::ParseTaskStatusError;
pub use ids::{ProjectId, TaskId, UserId};
pub use project::{PersistedProjectData, Project};
pub use task::{PersistedTaskData, Task, TaskStatus};
pub use user::User;
