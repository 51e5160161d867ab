//! User checks.

use super::{ABSENT_ID, add_user, expect_not_found, unique_email};
use mockable::DefaultClock;
use tracker::board::{
    domain::UserId,
    ports::StorageBackend,
    services::{AddUserRequest, EntityKind, ErrorKind, Tracker},
};

/// A registered user reads back with the values it was created with.
pub async fn add_then_get<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let email = unique_email("ann");
    let id = tracker
        .users()
        .add(AddUserRequest::new("Ann", email.clone()))
        .await?;

    let user = tracker.users().get(id).await?;
    eyre::ensure!(user.id() == id, "id mismatch: {:?}", user.id());
    eyre::ensure!(user.name() == "Ann", "name mismatch: {}", user.name());
    eyre::ensure!(user.email() == email, "email mismatch: {}", user.email());

    let all = tracker.users().get_all().await?;
    eyre::ensure!(all.iter().any(|listed| listed.id() == id), "user missing from list");
    Ok(())
}

/// A second user with the same email is rejected and the first survives.
pub async fn duplicate_email_conflicts<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let email = unique_email("dup");
    let first = tracker
        .users()
        .add(AddUserRequest::new("First", email.clone()))
        .await?;

    let result = tracker
        .users()
        .add(AddUserRequest::new("Second", email.clone()))
        .await;

    let err = result.err().ok_or_else(|| eyre::eyre!("duplicate email accepted"))?;
    eyre::ensure!(err.kind() == ErrorKind::Conflict, "expected conflict, got {err:?}");
    eyre::ensure!(
        err.to_string() == format!("User with email {email} already exists"),
        "unexpected message: {err}"
    );
    let survivor = tracker.users().get(first).await?;
    eyre::ensure!(survivor.name() == "First", "first user was altered");
    Ok(())
}

/// Lookup of an absent user is not found; deleting it is a no-op.
pub async fn absent_user<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let absent = UserId::from_raw(ABSENT_ID);
    expect_not_found(tracker.users().get(absent).await, EntityKind::User, ABSENT_ID)?;
    tracker.users().delete(absent).await?;

    let user = add_user(tracker, "idempotent").await?;
    tracker.users().delete(user).await?;
    tracker.users().delete(user).await?;
    expect_not_found(tracker.users().get(user).await, EntityKind::User, user.value())
}
