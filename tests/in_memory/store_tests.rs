//! In-memory gateway behaviour outside a workflow.

use backoffice::task::{
    domain::{TaskFields, TaskId, TaskStatus},
    schema::TaskSchema,
};
use backoffice::workflow::{
    adapters::memory::InMemoryGateway,
    domain::ActorRef,
    ports::{EntityGateway, GatewayError, ValidationConfig},
};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

use super::helpers::{TaskStore, seed_task, task_store};

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn seeded_records_list_in_insertion_order(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    seed_task(&task_store, "First", TaskStatus::Todo)?;
    seed_task(&task_store, "Second", TaskStatus::InProgress)?;
    seed_task(&task_store, "Third", TaskStatus::Done)?;

    let titles: Vec<String> = task_store
        .list()?
        .iter()
        .map(|task| task.fields().title().to_owned())
        .collect();

    assert_eq!(titles, vec!["First", "Second", "Third"]);
    Ok(())
}

#[rstest]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
fn seeded_records_carry_the_store_actor(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let task = seed_task(&task_store, "Stamped", TaskStatus::Todo)?;

    assert_eq!(task.provenance().created_by(), &ActorRef::new("integration"));
    assert_eq!(task.provenance().updated_by(), &ActorRef::new("integration"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn clones_share_the_same_records(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let handle = TaskStore::clone(&task_store);
    let fields = TaskFields::new("Shared", TaskStatus::Todo)?;

    let id = handle.create(&fields).await?;

    assert!(task_store.get(&id)?.is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn store_rejects_fields_its_schema_refuses(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let strict = ValidationConfig::strict();
    let long_title = "x".repeat(strict.max_text_length + 1);
    let fields = TaskFields::new(long_title, TaskStatus::Todo)?;
    let strict_store: TaskStore = InMemoryGateway::new(
        TaskSchema::with_config(strict),
        Arc::new(DefaultClock),
        ActorRef::new("integration"),
    );

    let lenient_result = task_store.create(&fields).await;
    let strict_result = strict_store.create(&fields).await;

    assert!(lenient_result.is_ok(), "got {lenient_result:?}");
    assert!(
        matches!(strict_result, Err(GatewayError::Validation(_))),
        "got {strict_result:?}"
    );
    assert!(strict_store.is_empty()?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
async fn deleting_twice_reports_not_found(task_store: Arc<TaskStore>) -> eyre::Result<()> {
    let task = seed_task(&task_store, "Once", TaskStatus::Todo)?;
    task_store.delete(task.id()).await?;

    let result = task_store.delete(task.id()).await;

    assert!(matches!(result, Err(GatewayError::NotFound(_))), "got {result:?}");
    assert!(task_store.get(&TaskId::from(1))?.is_none());
    Ok(())
}
