//! Cascading delete checks.

use super::{add_project, add_task, add_user, expect_not_found};
use mockable::DefaultClock;
use tracker::board::{
    ports::StorageBackend,
    services::{EntityKind, Tracker},
};

/// Deleting a user removes its projects and tasks and nothing else.
pub async fn user_delete_cascades<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let ann = add_user(tracker, "ann").await?;
    let bob = add_user(tracker, "bob").await?;
    let home = add_project(tracker, ann, "Home").await?;
    let filed = add_task(tracker, ann, Some(home), "Filed").await?;
    let loose = add_task(tracker, ann, None, "Loose").await?;
    let bobs_task = add_task(tracker, bob, None, "Unrelated").await?;

    tracker.users().delete(ann).await?;

    expect_not_found(tracker.users().get(ann).await, EntityKind::User, ann.value())?;
    expect_not_found(
        tracker.projects().get(home).await,
        EntityKind::Project,
        home.value(),
    )?;
    for task in [filed, loose] {
        expect_not_found(tracker.tasks().get(task).await, EntityKind::Task, task.value())?;
    }
    let projects = tracker.projects().get_all().await?;
    eyre::ensure!(
        projects.iter().all(|project| project.user_id() != ann),
        "projects of deleted user remain"
    );
    let tasks = tracker.tasks().get_all().await?;
    eyre::ensure!(
        tasks.iter().all(|task| task.user_id() != ann),
        "tasks of deleted user remain"
    );
    tracker.tasks().get(bobs_task).await?;
    tracker.users().get(bob).await?;
    Ok(())
}

/// Deleting a project removes the tasks filed under it and keeps the rest.
pub async fn project_delete_cascades<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let owner = add_user(tracker, "planner").await?;
    let home = add_project(tracker, owner, "Home").await?;
    let work = add_project(tracker, owner, "Work").await?;
    let home_task = add_task(tracker, owner, Some(home), "Dishes").await?;
    let work_task = add_task(tracker, owner, Some(work), "Report").await?;
    let loose = add_task(tracker, owner, None, "Stretch").await?;

    tracker.projects().delete(home).await?;
    tracker.projects().delete(home).await?;

    expect_not_found(
        tracker.tasks().get(home_task).await,
        EntityKind::Task,
        home_task.value(),
    )?;
    let remaining: Vec<_> = tracker
        .tasks()
        .get_all_by_user_id(owner)
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    eyre::ensure!(
        remaining == vec![work_task, loose],
        "unexpected remaining tasks: {remaining:?}"
    );
    tracker.users().get(owner).await?;
    tracker.projects().get(work).await?;
    Ok(())
}

/// User Ann files T1 under P1, re-files it there, then deletes P1.
pub async fn reassign_then_delete_project<B>(
    tracker: &Tracker<B, DefaultClock>,
) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let ann = add_user(tracker, "Ann").await?;
    let p1 = add_project(tracker, ann, "P1").await?;
    let t1 = add_task(tracker, ann, Some(p1), "T1").await?;
    let created = tracker.tasks().get(t1).await?;
    eyre::ensure!(
        created.status().as_str() == "NEW",
        "T1 started as {}",
        created.status()
    );

    tracker.tasks().assign_project(t1, p1).await?;
    tracker.projects().delete(p1).await?;

    let filed = tracker.tasks().get_all_by_project_id(p1).await?;
    eyre::ensure!(
        filed.iter().all(|task| task.id() != t1),
        "T1 still listed under P1"
    );
    expect_not_found(tracker.tasks().get(t1).await, EntityKind::Task, t1.value())
}
