//! Given steps for task edit workflow BDD scenarios.

use std::sync::Arc;

use super::world::TaskWorkflowWorld;
use backoffice::task::{
    domain::{TaskFields, TaskStatus},
    schema::TaskSchema,
};
use backoffice::workflow::{
    domain::Capabilities,
    services::{EditWorkflow, WorkflowPorts},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn open_editor(world: &mut TaskWorkflowWorld, capabilities: Capabilities) -> Result<(), eyre::Report> {
    let ports = WorkflowPorts::new(
        Arc::clone(&world.store),
        Arc::clone(&world.notifier),
        Arc::clone(&world.navigator),
    );
    let task = world.stored_task()?;
    let workflow = EditWorkflow::for_edit(task, TaskSchema::default(), capabilities, ports);
    world.workflow = Some(workflow);
    Ok(())
}

#[given("a task editor in creation mode with all capabilities")]
fn creation_editor(world: &mut TaskWorkflowWorld) {
    let ports = WorkflowPorts::new(
        Arc::clone(&world.store),
        Arc::clone(&world.notifier),
        Arc::clone(&world.navigator),
    );
    world.workflow = Some(EditWorkflow::for_create(
        TaskSchema::default(),
        Capabilities::all(),
        ports,
    ));
}

#[given(r#"a stored task titled "{title}""#)]
fn stored_task(world: &mut TaskWorkflowWorld, title: String) -> Result<(), eyre::Report> {
    let fields = TaskFields::new(title, TaskStatus::Todo).wrap_err("build task fields")?;
    let task = world.store.seed(&fields).wrap_err("seed task store")?;
    world.stored_task = Some(task);
    Ok(())
}

#[given("a task editor for the stored task with all capabilities")]
fn edit_editor(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    open_editor(world, Capabilities::all())
}

#[given("a task editor for the stored task without update permission")]
fn read_only_editor(world: &mut TaskWorkflowWorld) -> Result<(), eyre::Report> {
    open_editor(world, Capabilities::new(true, false, true))
}
