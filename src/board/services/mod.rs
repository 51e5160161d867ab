//! Consistency core for users, projects and tasks.
//!
//! Services enforce existence preconditions, the same-owner rule between a
//! task and its project, and ordered cascading deletes. They run unchanged
//! over every storage backend.

mod error;
mod lookup;
mod projects;
mod requests;
mod tasks;
mod tracker;
mod users;

pub use error::{EntityKind, ErrorBody, ErrorKind, TrackerError, TrackerResult};
pub use projects::ProjectService;
pub use requests::{
    AddProjectRequest, AddTaskRequest, AddUserRequest, EditProjectRequest, EditTaskRequest,
};
pub use tasks::TaskService;
pub use tracker::Tracker;
pub use users::UserService;
