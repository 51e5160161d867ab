//! In-memory project store.

use super::{read_lock, write_lock};
use crate::board::{
    domain::{PersistedProjectData, Project, ProjectId, UserId},
    ports::{
        NewProject, PROJECT_NAME_CONSTRAINT, ProjectChanges, ProjectStore, StoreError,
        StoreResult,
    },
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory project store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    state: Arc<RwLock<ProjectState>>,
}

#[derive(Debug, Default)]
struct ProjectState {
    rows: BTreeMap<ProjectId, Project>,
    last_id: i64,
}

impl ProjectState {
    /// Returns true when another project of the owner already uses the name.
    fn name_taken(&self, user_id: UserId, name: &str, except: Option<ProjectId>) -> bool {
        self.rows.values().any(|row| {
            row.user_id() == user_id && row.name() == name && Some(row.id()) != except
        })
    }
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn find_by_id(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        let state = read_lock(&self.state)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Project>> {
        let state = read_lock(&self.state)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Project>> {
        let state = read_lock(&self.state)?;
        Ok(state
            .rows
            .values()
            .filter(|row| row.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, project: &NewProject) -> StoreResult<ProjectId> {
        let mut state = write_lock(&self.state)?;
        if state.name_taken(project.user_id, &project.name, None) {
            return Err(StoreError::unique_violation(PROJECT_NAME_CONSTRAINT));
        }

        state.last_id += 1;
        let id = ProjectId::from_raw(state.last_id);
        let row = Project::from_persisted(PersistedProjectData {
            id,
            user_id: project.user_id,
            name: project.name.clone(),
            description: project.description.clone(),
            created_at: project.created_at,
        });
        state.rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        let Some(current) = state.rows.get(&id).cloned() else {
            return Ok(());
        };
        if state.name_taken(current.user_id(), &changes.name, Some(id)) {
            return Err(StoreError::unique_violation(PROJECT_NAME_CONSTRAINT));
        }

        let updated = Project::from_persisted(PersistedProjectData {
            id,
            user_id: current.user_id(),
            name: changes.name.clone(),
            description: changes.description.clone(),
            created_at: current.created_at(),
        });
        state.rows.insert(id, updated);
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        state.rows.remove(&id);
        Ok(())
    }

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize> {
        let mut state = write_lock(&self.state)?;
        let before = state.rows.len();
        state.rows.retain(|_, row| row.user_id() != user_id);
        Ok(before - state.rows.len())
    }
}
