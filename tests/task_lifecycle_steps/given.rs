//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::NaiveDate;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use worknest::{
    task::{domain::Actor, services::CreateTaskRequest},
    user::{
        domain::{NewUser, Role},
        ports::UserDirectory,
    },
};

#[given(r#"a member "{username}" assigned to task "{title}""#)]
fn member_assigned_to_task(
    world: &mut TaskLifecycleWorld,
    username: String,
    title: String,
) -> Result<(), eyre::Report> {
    let request = NewUser::new(username, Role::Member).wrap_err("build member request")?;
    let member = run_async(world.directory.create(request)).wrap_err("register member")?;

    let start = NaiveDate::from_ymd_opt(2024, 5, 1)
        .ok_or_else(|| eyre::eyre!("invalid start date"))?;
    let due = NaiveDate::from_ymd_opt(2024, 5, 31)
        .ok_or_else(|| eyre::eyre!("invalid due date"))?;
    let task_request = CreateTaskRequest::new(title)
        .with_assignees([member.id()])
        .with_dates(start, due);
    let task = run_async(world.lifecycle.create(&Actor::System, task_request))
        .wrap_err("create scenario task")?;

    world.member = Some(member);
    world.task = Some(task);
    Ok(())
}
