//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use worknest::task::{
    domain::{Actor, TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

#[then("the status change fails because the task is frozen")]
fn status_change_rejected(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_status_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::Frozen(_)))
    ) {
        return Err(eyre::eyre!("expected Frozen error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task()?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the latest activity is "{action}""#)]
fn latest_activity_is(world: &TaskLifecycleWorld, action: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let trail =
        run_async(world.audit.get_for_task(task_id)).wrap_err("load activity trail")?;
    let latest = trail
        .first()
        .ok_or_else(|| eyre::eyre!("activity trail is empty"))?;

    if latest.action() != action {
        return Err(eyre::eyre!(
            "expected latest activity {action}, found {}",
            latest.action()
        ));
    }
    Ok(())
}

#[then("the active listing holds {count:usize} tasks")]
fn active_listing_holds(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let active = run_async(world.lifecycle.find_all_active(&Actor::System))
        .wrap_err("list active tasks")?;

    if active.len() != count {
        return Err(eyre::eyre!(
            "expected {count} active tasks, found {}",
            active.len()
        ));
    }
    Ok(())
}

#[then("the task is still retrievable by id")]
fn task_still_retrievable(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let task = run_async(world.lifecycle.get(&Actor::System, task_id))
        .wrap_err("fetch deleted task")?;

    if !task.is_deleted() {
        return Err(eyre::eyre!("expected task to be flagged as deleted"));
    }
    Ok(())
}
