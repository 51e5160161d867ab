//! Task checks.

use super::{ABSENT_ID, add_project, add_task, add_user, expect_not_found};
use mockable::DefaultClock;
use tracker::board::{
    domain::{ProjectId, TaskId, TaskStatus, UserId},
    ports::StorageBackend,
    services::{AddTaskRequest, EditTaskRequest, EntityKind, ErrorKind, Tracker},
};

/// New tasks always start as `NEW` whatever status the caller asks for.
pub async fn status_forced_to_new<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let owner = add_user(tracker, "starter").await?;
    let id = tracker
        .tasks()
        .add(
            AddTaskRequest::new(owner, "Eager")
                .with_status("DONE")
                .with_description("Wants to be finished"),
        )
        .await?;

    let task = tracker.tasks().get(id).await?;
    eyre::ensure!(task.status() == TaskStatus::New, "status was {}", task.status());
    eyre::ensure!(task.project_id().is_none(), "unexpected project");
    eyre::ensure!(
        task.description() == Some("Wants to be finished"),
        "description lost"
    );
    Ok(())
}

/// Creation checks that the user and project exist and share an owner.
pub async fn add_checks_references<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let ann = add_user(tracker, "ann").await?;
    let bob = add_user(tracker, "bob").await?;
    let bobs_project = add_project(tracker, bob, "Garden").await?;

    expect_not_found(
        tracker
            .tasks()
            .add(AddTaskRequest::new(UserId::from_raw(ABSENT_ID), "Orphan"))
            .await,
        EntityKind::User,
        ABSENT_ID,
    )?;
    expect_not_found(
        tracker
            .tasks()
            .add(AddTaskRequest::new(ann, "Misfiled").with_project(ProjectId::from_raw(ABSENT_ID)))
            .await,
        EntityKind::Project,
        ABSENT_ID,
    )?;
    let foreign = tracker
        .tasks()
        .add(AddTaskRequest::new(ann, "Trespass").with_project(bobs_project))
        .await;
    let err = foreign
        .err()
        .ok_or_else(|| eyre::eyre!("task under foreign project accepted"))?;
    eyre::ensure!(err.kind() == ErrorKind::BadRequest, "expected bad request, got {err:?}");

    let anns = tracker.tasks().get_all_by_user_id(ann).await?;
    eyre::ensure!(anns.is_empty(), "rejected tasks were stored");
    Ok(())
}

/// Edits parse status text first and ignore absent tasks otherwise.
pub async fn edit_parses_status<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let absent = TaskId::from_raw(ABSENT_ID);
    let bad = tracker
        .tasks()
        .edit(absent, EditTaskRequest::new("Anything", "SOMEDAY"))
        .await;
    let err = bad.err().ok_or_else(|| eyre::eyre!("unknown status accepted"))?;
    eyre::ensure!(err.kind() == ErrorKind::BadRequest, "expected bad request, got {err:?}");
    tracker
        .tasks()
        .edit(absent, EditTaskRequest::new("Anything", "DONE"))
        .await?;

    let owner = add_user(tracker, "writer").await?;
    let id = add_task(tracker, owner, None, "Outline").await?;
    tracker
        .tasks()
        .edit(id, EditTaskRequest::new("Chapter", "in_progress").with_description("Draft"))
        .await?;

    let task = tracker.tasks().get(id).await?;
    eyre::ensure!(task.name() == "Chapter", "name not updated");
    eyre::ensure!(task.description() == Some("Draft"), "description not updated");
    eyre::ensure!(task.status() == TaskStatus::InProgress, "status was {}", task.status());
    Ok(())
}

/// Status changes accept every transition and ignore absent tasks.
pub async fn change_status_moves_freely<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let owner = add_user(tracker, "mover").await?;
    let id = add_task(tracker, owner, None, "Cycle").await?;

    for status in [TaskStatus::Done, TaskStatus::New, TaskStatus::InProgress] {
        tracker.tasks().change_status(id, status).await?;
        let task = tracker.tasks().get(id).await?;
        eyre::ensure!(task.status() == status, "expected {status}, found {}", task.status());
    }
    tracker
        .tasks()
        .change_status(TaskId::from_raw(ABSENT_ID), TaskStatus::Done)
        .await?;
    Ok(())
}

/// Assignment requires both rows and a shared owner; re-assignment succeeds.
pub async fn assign_project_checks_owner<B>(
    tracker: &Tracker<B, DefaultClock>,
) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let ann = add_user(tracker, "ann").await?;
    let bob = add_user(tracker, "bob").await?;
    let home = add_project(tracker, ann, "Home").await?;
    let garden = add_project(tracker, bob, "Garden").await?;
    let task = add_task(tracker, ann, None, "Sweep").await?;

    let mismatch = tracker.tasks().assign_project(task, garden).await;
    let err = mismatch
        .err()
        .ok_or_else(|| eyre::eyre!("assignment across owners accepted"))?;
    eyre::ensure!(err.kind() == ErrorKind::BadRequest, "expected bad request, got {err:?}");

    tracker.tasks().assign_project(task, home).await?;
    tracker.tasks().assign_project(task, home).await?;
    let stored = tracker.tasks().get(task).await?;
    eyre::ensure!(stored.project_id() == Some(home), "project not assigned");

    expect_not_found(
        tracker
            .tasks()
            .assign_project(TaskId::from_raw(ABSENT_ID), home)
            .await,
        EntityKind::Task,
        ABSENT_ID,
    )?;
    expect_not_found(
        tracker
            .tasks()
            .assign_project(task, ProjectId::from_raw(ABSENT_ID))
            .await,
        EntityKind::Project,
        ABSENT_ID,
    )
}

/// Status changes and project assignment each touch only their own column.
pub async fn status_and_project_changes_touch_one_field<B>(
    tracker: &Tracker<B, DefaultClock>,
) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let owner = add_user(tracker, "mover").await?;
    let home = add_project(tracker, owner, "Home").await?;
    let id = tracker
        .tasks()
        .add(AddTaskRequest::new(owner, "Paint").with_description("Two coats"))
        .await?;
    let original = tracker.tasks().get(id).await?;

    tracker.tasks().change_status(id, TaskStatus::Done).await?;
    let after_status = tracker.tasks().get(id).await?;
    eyre::ensure!(after_status.status() == TaskStatus::Done, "status not changed");
    eyre::ensure!(after_status.project_id().is_none(), "project set by status change");

    tracker.tasks().assign_project(id, home).await?;
    let moved = tracker.tasks().get(id).await?;
    eyre::ensure!(moved.project_id() == Some(home), "project not assigned");
    eyre::ensure!(moved.status() == TaskStatus::Done, "status reset by assignment");
    eyre::ensure!(moved.name() == "Paint", "name changed to {}", moved.name());
    eyre::ensure!(
        moved.description() == Some("Two coats"),
        "description changed: {:?}",
        moved.description()
    );
    eyre::ensure!(moved.user_id() == owner, "owner changed");
    eyre::ensure!(
        moved.created_at() == original.created_at(),
        "creation timestamp changed"
    );
    Ok(())
}

/// Filtered lists return matching rows and are empty for absent keys.
pub async fn filtered_lists<B>(tracker: &Tracker<B, DefaultClock>) -> eyre::Result<()>
where
    B: StorageBackend + ?Sized,
{
    let ann = add_user(tracker, "ann").await?;
    let bob = add_user(tracker, "bob").await?;
    let home = add_project(tracker, ann, "Home").await?;
    let filed = add_task(tracker, ann, Some(home), "Filed").await?;
    let loose = add_task(tracker, ann, None, "Loose").await?;
    add_task(tracker, bob, None, "Elsewhere").await?;

    let by_user: Vec<TaskId> = tracker
        .tasks()
        .get_all_by_user_id(ann)
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    let by_project: Vec<TaskId> = tracker
        .tasks()
        .get_all_by_project_id(home)
        .await?
        .iter()
        .map(|task| task.id())
        .collect();
    eyre::ensure!(by_user == vec![filed, loose], "tasks by user: {by_user:?}");
    eyre::ensure!(by_project == vec![filed], "tasks by project: {by_project:?}");

    let absent_user = tracker
        .tasks()
        .get_all_by_user_id(UserId::from_raw(ABSENT_ID))
        .await?;
    let absent_project = tracker
        .tasks()
        .get_all_by_project_id(ProjectId::from_raw(ABSENT_ID))
        .await?;
    eyre::ensure!(absent_user.is_empty(), "absent user has tasks");
    eyre::ensure!(absent_project.is_empty(), "absent project has tasks");

    expect_not_found(
        tracker.tasks().get(TaskId::from_raw(ABSENT_ID)).await,
        EntityKind::Task,
        ABSENT_ID,
    )
}
