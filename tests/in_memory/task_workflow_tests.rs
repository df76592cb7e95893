//! In-memory integration tests for the task edit workflow.

use backoffice::task::{
    domain::{TaskId, TaskStatus},
    schema::TaskSchema,
};
use backoffice::workflow::{
    domain::{Capabilities, Lifecycle, NotificationKind, WorkflowMode},
    services::SaveOutcome,
};
use rstest::rstest;
use std::sync::Arc;

use super::helpers::{TaskStore, open_create, open_edit, seed_task, task_store};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn created_task_is_stored_and_opened(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let session = open_create(&task_store, TaskSchema::default(), Capabilities::all());
    session.workflow.set_field("title", "Ship report")?;
    session.workflow.set_field("status", "InProgress")?;

    let outcome = session.workflow.save().await;

    let SaveOutcome::Created(id) = outcome else {
        eyre::bail!("expected a created task, got {outcome:?}");
    };
    let stored = task_store
        .get(&id)?
        .ok_or_else(|| eyre::eyre!("task {id} missing from store"))?;
    assert_eq!(stored.fields().title(), "Ship report");
    assert_eq!(stored.fields().status(), TaskStatus::InProgress);
    assert_eq!(stored.fields().description(), None);
    assert_eq!(session.navigator.paths(), vec![format!("/tasks/{id}")]);
    assert_eq!(session.workflow.mode(), WorkflowMode::Edit(id));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn second_save_after_create_updates_the_same_task(
    task_store: Arc<TaskStore>,
) -> eyre::Result<()> {
    let session = open_create(&task_store, TaskSchema::default(), Capabilities::all());
    session.workflow.set_field("title", "Draft")?;
    assert!(session.workflow.save().await.is_saved());

    session.workflow.set_field("title", "Final")?;
    let outcome = session.workflow.save().await;

    assert!(matches!(outcome, SaveOutcome::Updated), "got {outcome:?}");
    assert_eq!(task_store.len()?, 1);
    let stored = task_store
        .get(&TaskId::from(1))?
        .ok_or_else(|| eyre::eyre!("task 1 missing from store"))?;
    assert_eq!(stored.fields().title(), "Final");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn invalid_draft_never_reaches_the_store(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let session = open_create(&task_store, TaskSchema::default(), Capabilities::all());
    session.workflow.set_field("status", "Someday")?;

    let outcome = session.workflow.save().await;

    let SaveOutcome::Rejected(errors) = outcome else {
        eyre::bail!("expected a rejected draft, got {outcome:?}");
    };
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(
        errors.get("status"),
        Some("Status must be one of: Todo, InProgress, Done")
    );
    assert!(task_store.is_empty()?);
    assert!(session.notifier.notifications().is_empty());
    assert_eq!(session.workflow.lifecycle(), Lifecycle::Idle);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn update_stamps_provenance_and_stays_on_view(
    task_store: Arc<TaskStore>,
) -> eyre::Result<()> {
    let task = seed_task(&task_store, "Write changelog", TaskStatus::Todo)?;
    let session = open_edit(&task_store, &task, TaskSchema::default(), Capabilities::all());
    session.workflow.set_field("description", "Cover the 2.0 release")?;

    let outcome = session.workflow.save().await;

    assert!(matches!(outcome, SaveOutcome::Updated), "got {outcome:?}");
    let stored = task_store
        .get(task.id())?
        .ok_or_else(|| eyre::eyre!("task missing from store"))?;
    assert_eq!(stored.fields().description(), Some("Cover the 2.0 release"));
    assert_eq!(
        stored.provenance().created_at(),
        task.provenance().created_at()
    );
    assert!(stored.provenance().updated_at() >= task.provenance().updated_at());
    assert!(session.navigator.intents().is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn delete_removes_task_and_returns_to_list(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let keep = seed_task(&task_store, "Keep", TaskStatus::Done)?;
    let task = seed_task(&task_store, "Archive", TaskStatus::Done)?;
    let session = open_edit(&task_store, &task, TaskSchema::default(), Capabilities::all());

    let confirmation = session.workflow.request_delete()?;
    let outcome = session.workflow.confirm_delete(confirmation).await;

    assert!(outcome.is_deleted(), "got {outcome:?}");
    assert!(task_store.get(task.id())?.is_none());
    assert!(task_store.get(keep.id())?.is_some());
    assert_eq!(session.navigator.paths(), vec!["/tasks".to_owned()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn saving_a_task_deleted_elsewhere_reports_failure(
    task_store: Arc<TaskStore>,
) -> eyre::Result<()> {
    let task = seed_task(&task_store, "Contested", TaskStatus::Todo)?;
    let editor = open_edit(&task_store, &task, TaskSchema::default(), Capabilities::all());
    let remover = open_edit(&task_store, &task, TaskSchema::default(), Capabilities::all());

    let confirmation = remover.workflow.request_delete()?;
    assert!(remover.workflow.confirm_delete(confirmation).await.is_deleted());

    editor.workflow.set_field("title", "Still here?")?;
    let outcome = editor.workflow.save().await;

    assert!(matches!(outcome, SaveOutcome::Failed(_)), "got {outcome:?}");
    let notifications = editor.notifier.notifications();
    let failure = notifications
        .first()
        .ok_or_else(|| eyre::eyre!("expected a failure notification"))?;
    assert_eq!(failure.kind(), NotificationKind::Failure);
    assert_eq!(failure.title(), "Could not save task");
    assert_eq!(editor.workflow.values().value("title"), "Still here?");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn last_write_wins_between_concurrent_editors(
    task_store: Arc<TaskStore>,
) -> eyre::Result<()> {
    let task = seed_task(&task_store, "Shared", TaskStatus::Todo)?;
    let first = open_edit(&task_store, &task, TaskSchema::default(), Capabilities::all());
    let second = open_edit(&task_store, &task, TaskSchema::default(), Capabilities::all());

    first.workflow.set_field("status", "InProgress")?;
    second.workflow.set_field("status", "Done")?;
    assert!(first.workflow.save().await.is_saved());
    assert!(second.workflow.save().await.is_saved());

    let stored = task_store
        .get(task.id())?
        .ok_or_else(|| eyre::eyre!("task missing from store"))?;
    assert_eq!(stored.fields().status(), TaskStatus::Done);
    Ok(())
}
