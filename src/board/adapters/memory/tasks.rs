//! In-memory task store.

use super::{read_lock, write_lock};
use crate::board::{
    domain::{PersistedTaskData, ProjectId, Task, TaskId, TaskStatus, UserId},
    ports::{NewTask, StoreResult, TaskChanges, TaskStore},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<TaskState>>,
}

#[derive(Debug, Default)]
struct TaskState {
    rows: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl TaskState {
    /// Rewrites a stored task in place; missing rows are left untouched.
    fn modify(&mut self, id: TaskId, apply: impl FnOnce(&mut PersistedTaskData)) {
        if let Some(row) = self.rows.get_mut(&id) {
            let mut data = to_data(row);
            apply(&mut data);
            *row = Task::from_persisted(data);
        }
    }

    fn remove_where(&mut self, predicate: impl Fn(&Task) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !predicate(&*row));
        before - self.rows.len()
    }
}

fn to_data(task: &Task) -> PersistedTaskData {
    PersistedTaskData {
        id: task.id(),
        user_id: task.user_id(),
        project_id: task.project_id(),
        name: task.name().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status(),
        created_at: task.created_at(),
    }
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(&self, predicate: impl Fn(&Task) -> bool) -> StoreResult<Vec<Task>> {
        let state = read_lock(&self.state)?;
        Ok(state
            .rows
            .values()
            .filter(|row| predicate(*row))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let state = read_lock(&self.state)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        self.filtered(|_| true)
    }

    async fn list_by_user(&self, user_id: UserId) -> StoreResult<Vec<Task>> {
        self.filtered(|row| row.user_id() == user_id)
    }

    async fn list_by_project(&self, project_id: ProjectId) -> StoreResult<Vec<Task>> {
        self.filtered(|row| row.project_id() == Some(project_id))
    }

    async fn insert(&self, task: &NewTask) -> StoreResult<TaskId> {
        let mut state = write_lock(&self.state)?;
        state.last_id += 1;
        let id = TaskId::from_raw(state.last_id);
        let row = Task::from_persisted(PersistedTaskData {
            id,
            user_id: task.user_id,
            project_id: task.project_id,
            name: task.name.clone(),
            description: task.description.clone(),
            status: task.status,
            created_at: task.created_at,
        });
        state.rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        state.modify(id, |data| {
            data.name.clone_from(&changes.name);
            data.description.clone_from(&changes.description);
            data.status = changes.status;
        });
        Ok(())
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        state.modify(id, |data| data.status = status);
        Ok(())
    }

    async fn update_project(&self, id: TaskId, project_id: ProjectId) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        state.modify(id, |data| data.project_id = Some(project_id));
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        state.rows.remove(&id);
        Ok(())
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> StoreResult<usize> {
        let mut state = write_lock(&self.state)?;
        Ok(state.remove_where(|row| row.project_id() == Some(project_id)))
    }

    async fn delete_by_user(&self, user_id: UserId) -> StoreResult<usize> {
        let mut state = write_lock(&self.state)?;
        Ok(state.remove_where(|row| row.user_id() == user_id))
    }
}
