//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use worknest::task::domain::{Actor, TaskStatus};

#[when("an administrator toggles the freeze flag")]
fn toggle_freeze(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let updated = run_async(world.lifecycle.toggle_freeze(&Actor::System, task_id))
        .wrap_err("toggle freeze")?;
    world.task = Some(updated);
    Ok(())
}

#[when(r#"the member sets the status to "{status}""#)]
fn member_sets_status(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let actor = Actor::for_user(world.member()?);
    let task_id = world.task()?.id();

    let result = run_async(world.lifecycle.update_status(&actor, task_id, status));
    if let Ok(ref updated) = result {
        world.task = Some(updated.clone());
    }
    world.last_status_result = Some(result);
    Ok(())
}

#[when("an administrator soft deletes the task")]
fn soft_delete(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let updated = run_async(world.lifecycle.soft_delete(&Actor::System, task_id))
        .wrap_err("soft delete task")?;
    world.task = Some(updated);
    Ok(())
}

#[when("an administrator restores the task")]
fn restore(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let updated = run_async(world.lifecycle.restore(&Actor::System, task_id))
        .wrap_err("restore task")?;
    world.task = Some(updated);
    Ok(())
}
