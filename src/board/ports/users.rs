//! Store port for user rows.

use super::{NewUser, StoreResult};
use crate::board::domain::{User, UserId};
use async_trait::async_trait;

/// User persistence contract.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Returns every user ordered by identifier.
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Inserts a user and returns the generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::StoreError::UniqueViolation`] when the email address
    /// is already taken.
    async fn insert(&self, user: &NewUser) -> StoreResult<UserId>;

    /// Deletes a user row. Deleting a missing row is not an error.
    async fn delete(&self, id: UserId) -> StoreResult<()>;
}
