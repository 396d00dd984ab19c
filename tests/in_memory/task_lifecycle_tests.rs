//! Task lifecycle integration tests over the public service API.

use super::helpers::{Services, date, services};
use rstest::rstest;
use worknest::{
    task::{
        domain::{Actor, TaskId, TaskStatus},
        services::{CreateTaskRequest, ErrorKind, TaskLifecycleError},
    },
    user::domain::Role,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_pending_and_logged(services: Services) {
    let ana = services.user("ana", Role::Member).await;
    let ben = services.user("ben", Role::Member).await;
    let task = services.task("Write release notes", &[&ana, &ben]).await;

    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(!task.is_frozen());
    assert!(!task.is_deleted());
    assert_eq!(task.assignees().len(), 2);

    let trail = services
        .audit
        .get_for_task(task.id())
        .await
        .expect("activity lookup should succeed");
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].action(), "Task Created");
    assert_eq!(trail[0].details(), "Task created and assigned to 2 users");
    assert_eq!(trail[0].actor(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_rejects_reversed_dates(services: Services) {
    let ana = services.user("ana", Role::Member).await;
    let request = CreateTaskRequest::new("Backwards")
        .with_assignees([ana.id()])
        .with_dates(date(2024, 3, 10), date(2024, 3, 1));

    let err = services
        .lifecycle
        .create(&Actor::System, request)
        .await
        .expect_err("due before start must fail");
    assert_eq!(err.kind(), ErrorKind::Validation);

    let active = services
        .lifecycle
        .find_all_active(&Actor::System)
        .await
        .expect("listing should succeed");
    assert!(active.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn frozen_task_refuses_status_change_until_unfrozen(services: Services) {
    let admin = services.user("root", Role::Admin).await;
    let ana = services.user("ana", Role::Member).await;
    let task = services.task("Audit budget", &[&ana]).await;
    let admin_actor = Actor::for_user(&admin);
    let member = Actor::for_user(&ana);

    let frozen = services
        .lifecycle
        .toggle_freeze(&admin_actor, task.id())
        .await
        .expect("freeze should succeed");
    assert!(frozen.is_frozen());

    let err = services
        .lifecycle
        .update_status(&member, task.id(), TaskStatus::InProgress)
        .await
        .expect_err("frozen task must refuse status changes");
    assert_eq!(err.kind(), ErrorKind::Frozen);

    services
        .lifecycle
        .toggle_freeze(&admin_actor, task.id())
        .await
        .expect("unfreeze should succeed");
    let updated = services
        .lifecycle
        .update_status(&member, task.id(), TaskStatus::InProgress)
        .await
        .expect("status change should succeed after unfreezing");
    assert_eq!(updated.status(), TaskStatus::InProgress);

    let trail = services
        .audit
        .get_for_task(task.id())
        .await
        .expect("activity lookup should succeed");
    let actions: Vec<&str> = trail.iter().map(|entry| entry.action()).collect();
    assert_eq!(
        actions,
        [
            "Status Updated",
            "Task Unfrozen",
            "Task Frozen",
            "Task Created"
        ]
    );
    assert_eq!(trail[0].details(), "Changed to IN_PROGRESS");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn members_cannot_freeze_or_touch_foreign_tasks(services: Services) {
    let ana = services.user("ana", Role::Member).await;
    let ben = services.user("ben", Role::Member).await;
    let task = services.task("Private", &[&ana]).await;

    let freeze = services
        .lifecycle
        .toggle_freeze(&Actor::for_user(&ana), task.id())
        .await;
    assert!(matches!(
        freeze,
        Err(TaskLifecycleError::Forbidden { .. })
    ));

    let update = services
        .lifecycle
        .update_status(&Actor::for_user(&ben), task.id(), TaskStatus::Completed)
        .await;
    assert!(matches!(
        update,
        Err(TaskLifecycleError::NotAssignee { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn soft_deleted_task_keeps_history_and_returns_on_restore(services: Services) {
    let ana = services.user("ana", Role::Member).await;
    let task = services.task("Archive me", &[&ana]).await;
    services
        .comments
        .add(&Actor::for_user(&ana), task.id(), "first note")
        .await
        .expect("comment should be stored");

    services
        .lifecycle
        .soft_delete(&Actor::System, task.id())
        .await
        .expect("soft delete should succeed");
    let active = services
        .lifecycle
        .find_all_active(&Actor::System)
        .await
        .expect("listing should succeed");
    assert!(active.is_empty());

    let hidden = services
        .lifecycle
        .get(&Actor::System, task.id())
        .await
        .expect("deleted task is still retrievable by id");
    assert!(hidden.is_deleted());
    let comments = services
        .comments
        .list_by_task(task.id())
        .await
        .expect("comments should survive soft delete");
    assert_eq!(comments.len(), 1);

    services
        .lifecycle
        .restore(&Actor::System, task.id())
        .await
        .expect("restore should succeed");
    let active = services
        .lifecycle
        .find_all_active(&Actor::System)
        .await
        .expect("listing should succeed");
    assert_eq!(active.len(), 1);

    let trail = services
        .audit
        .get_for_task(task.id())
        .await
        .expect("activity lookup should succeed");
    assert_eq!(trail.len(), 4);
    assert_eq!(trail[0].action(), "Task Restored");
    assert_eq!(trail[1].action(), "Task Soft Deleted");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_reports_not_found(services: Services) {
    let ghost = TaskId::new();
    let err = services
        .lifecycle
        .soft_delete(&Actor::System, ghost)
        .await
        .expect_err("missing task must fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
