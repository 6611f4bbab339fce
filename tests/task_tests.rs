mod common;
use common::memory_pool;
use staffbot::core::tasks::TaskLogic;
use staffbot::errors::AppError;
use staffbot::models::task::TaskState;

#[test]
fn test_assign_list_done_approve_scenario() {
    let mut pool = memory_pool();

    let id = TaskLogic::assign(&mut pool, "A", "B", "2024-01-01", "Write report").unwrap();
    assert_eq!(id, 1);

    let tasks = TaskLogic::list_for(&mut pool, "B").unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].assigner, "A");
    assert_eq!(tasks[0].description, "Write report");
    assert_eq!(tasks[0].deadline, "2024-01-01");
    assert_eq!(tasks[0].state(), TaskState::Pending);

    TaskLogic::mark_assignee_done(&mut pool, id, "B").unwrap();
    let t = TaskLogic::get(&mut pool, id).unwrap();
    assert!(t.assignee_done);
    assert!(!t.is_completed());

    TaskLogic::mark_approved(&mut pool, id, "A", &[]).unwrap();
    let t = TaskLogic::get(&mut pool, id).unwrap();
    assert!(t.is_completed());
    assert_eq!(t.state(), TaskState::Completed);
}

#[test]
fn test_approval_alone_does_not_complete() {
    let mut pool = memory_pool();

    let id = TaskLogic::assign(&mut pool, "A", "B", "friday", "Deploy").unwrap();
    TaskLogic::mark_approved(&mut pool, id, "A", &[]).unwrap();

    let t = TaskLogic::get(&mut pool, id).unwrap();
    assert!(t.approver_done);
    assert!(!t.assignee_done);
    assert!(!t.is_completed());
}

#[test]
fn test_flags_are_idempotent() {
    let mut pool = memory_pool();

    let id = TaskLogic::assign(&mut pool, "A", "B", "friday", "Deploy").unwrap();
    TaskLogic::mark_assignee_done(&mut pool, id, "B").unwrap();
    TaskLogic::mark_assignee_done(&mut pool, id, "B").unwrap();

    assert!(TaskLogic::get(&mut pool, id).unwrap().assignee_done);
}

#[test]
fn test_unknown_task_is_reported() {
    let mut pool = memory_pool();

    let err = TaskLogic::mark_assignee_done(&mut pool, 42, "B").unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(42)));

    let err = TaskLogic::mark_approved(&mut pool, 42, "A", &[]).unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(42)));

    let err = TaskLogic::get(&mut pool, 42).unwrap_err();
    assert!(matches!(err, AppError::TaskNotFound(42)));
}

#[test]
fn test_approver_list_is_enforced() {
    let mut pool = memory_pool();
    let approvers = vec!["boss".to_string()];

    let id = TaskLogic::assign(&mut pool, "A", "B", "friday", "Deploy").unwrap();

    let err = TaskLogic::mark_approved(&mut pool, id, "B", &approvers).unwrap_err();
    assert!(matches!(err, AppError::NotApprover(ref u) if u == "B"));
    assert!(!TaskLogic::get(&mut pool, id).unwrap().approver_done);

    TaskLogic::mark_approved(&mut pool, id, "boss", &approvers).unwrap();
    assert!(TaskLogic::get(&mut pool, id).unwrap().approver_done);
}

#[test]
fn test_list_only_returns_assignee_tasks_in_id_order() {
    let mut pool = memory_pool();

    TaskLogic::assign(&mut pool, "A", "B", "mon", "first").unwrap();
    TaskLogic::assign(&mut pool, "A", "C", "tue", "other").unwrap();
    TaskLogic::assign(&mut pool, "C", "B", "wed", "second").unwrap();

    let tasks = TaskLogic::list_for(&mut pool, "B").unwrap();
    let descs: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, vec!["first", "second"]);

    assert!(TaskLogic::list_for(&mut pool, "nobody").unwrap().is_empty());
}
