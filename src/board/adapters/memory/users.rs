//! In-memory user store.

use super::{read_lock, write_lock};
use crate::board::{
    domain::{User, UserId},
    ports::{NewUser, StoreError, StoreResult, USER_EMAIL_CONSTRAINT, UserStore},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory user store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    state: Arc<RwLock<UserState>>,
}

#[derive(Debug, Default)]
struct UserState {
    rows: BTreeMap<UserId, User>,
    last_id: i64,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let state = read_lock(&self.state)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let state = read_lock(&self.state)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn insert(&self, user: &NewUser) -> StoreResult<UserId> {
        let mut state = write_lock(&self.state)?;
        if state.rows.values().any(|row| row.email() == user.email) {
            return Err(StoreError::unique_violation(USER_EMAIL_CONSTRAINT));
        }

        state.last_id += 1;
        let id = UserId::from_raw(state.last_id);
        state
            .rows
            .insert(id, User::new(id, user.name.clone(), user.email.clone()));
        Ok(id)
    }

    async fn delete(&self, id: UserId) -> StoreResult<()> {
        let mut state = write_lock(&self.state)?;
        state.rows.remove(&id);
        Ok(())
    }
}
