//! Shared world state for cascading delete scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tracker::board::{
    adapters::memory::InMemoryBackend,
    domain::{ProjectId, TaskId, UserId},
    services::{Tracker, TrackerError},
};

/// Tracker type used by the BDD world.
pub type TestTracker = Tracker<InMemoryBackend, DefaultClock>;

/// Scenario world naming rows by the labels used in feature files.
pub struct BoardWorld {
    pub tracker: TestTracker,
    pub users: HashMap<String, UserId>,
    pub projects: HashMap<String, ProjectId>,
    pub tasks: HashMap<String, TaskId>,
    pub last_assignment: Option<Result<(), TrackerError>>,
}

impl BoardWorld {
    /// Creates a world over an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: Tracker::new(Arc::new(InMemoryBackend::new()), Arc::new(DefaultClock)),
            users: HashMap::new(),
            projects: HashMap::new(),
            tasks: HashMap::new(),
            last_assignment: None,
        }
    }

    /// Resolves a user label.
    pub fn user(&self, label: &str) -> Result<UserId, eyre::Report> {
        self.users
            .get(label)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown user {label} in scenario world"))
    }

    /// Resolves a project label.
    pub fn project(&self, label: &str) -> Result<ProjectId, eyre::Report> {
        self.projects
            .get(label)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown project {label} in scenario world"))
    }

    /// Resolves a task label.
    pub fn task(&self, label: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(label)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task {label} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
