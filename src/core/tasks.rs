use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::tasks::{
    insert_task, load_task, load_tasks_for, set_approver_done, set_assignee_done,
};
use crate::errors::{AppError, AppResult};
use crate::models::task::Task;

pub struct TaskLogic;

impl TaskLogic {
    /// Create a task with both completion flags cleared and return its id.
    /// Anyone may assign to anyone; the deadline is stored as typed.
    pub fn assign(
        pool: &mut DbPool,
        assigner: &str,
        assignee: &str,
        deadline: &str,
        description: &str,
    ) -> AppResult<i64> {
        pool.with_tx(|tx| {
            let id = insert_task(tx, assigner, assignee, description, deadline)?;
            ttlog(
                tx,
                "assign",
                &format!("task {id}"),
                &format!("{assigner} -> {assignee}: {description} (deadline {deadline})"),
            )?;
            Ok(id)
        })
    }

    pub fn list_for(pool: &mut DbPool, assignee: &str) -> AppResult<Vec<Task>> {
        pool.with_tx(|tx| Ok(load_tasks_for(tx, assignee)?))
    }

    pub fn get(pool: &mut DbPool, task_id: i64) -> AppResult<Task> {
        pool.with_tx(|tx| load_task(tx, task_id)?.ok_or(AppError::TaskNotFound(task_id)))
    }

    /// Record that the assignee finished the task.
    pub fn mark_assignee_done(pool: &mut DbPool, task_id: i64, by: &str) -> AppResult<()> {
        pool.with_tx(|tx| {
            if set_assignee_done(tx, task_id)? == 0 {
                return Err(AppError::TaskNotFound(task_id));
            }
            ttlog(
                tx,
                "done",
                &format!("task {task_id}"),
                &format!("marked done by {by}"),
            )
        })
    }

    /// Record the approver's sign-off.
    ///
    /// When `approvers` is non-empty only the listed users may approve;
    /// an empty list leaves approval open to everyone.
    pub fn mark_approved(
        pool: &mut DbPool,
        task_id: i64,
        by: &str,
        approvers: &[String],
    ) -> AppResult<()> {
        if !approvers.is_empty() && !approvers.iter().any(|a| a == by) {
            return Err(AppError::NotApprover(by.to_string()));
        }

        pool.with_tx(|tx| {
            if set_approver_done(tx, task_id)? == 0 {
                return Err(AppError::TaskNotFound(task_id));
            }
            ttlog(
                tx,
                "approve",
                &format!("task {task_id}"),
                &format!("approved by {by}"),
            )
        })
    }
}
