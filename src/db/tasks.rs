use crate::models::task::Task;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TASK_COLUMNS: &str =
    "task_id, assigned_by, assigned_to, task_desc, deadline, is_user_done, is_admin_done";

pub fn map_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get("task_id")?,
        assigner: row.get("assigned_by")?,
        assignee: row.get("assigned_to")?,
        description: row.get("task_desc")?,
        deadline: row.get("deadline")?,
        assignee_done: row.get::<_, i32>("is_user_done")? == 1,
        approver_done: row.get::<_, i32>("is_admin_done")? == 1,
    })
}

/// Insert a new task with both completion flags cleared; returns its id.
pub fn insert_task(
    conn: &Connection,
    assigner: &str,
    assignee: &str,
    description: &str,
    deadline: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO tasks (assigned_by, assigned_to, task_desc, deadline)
         VALUES (?1, ?2, ?3, ?4)",
        params![assigner, assignee, description, deadline],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_task(conn: &Connection, task_id: i64) -> Result<Option<Task>> {
    conn.query_row(
        &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE task_id = ?1"),
        [task_id],
        map_row,
    )
    .optional()
}

pub fn load_tasks_for(conn: &Connection, assignee: &str) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks WHERE assigned_to = ?1 ORDER BY task_id ASC"
    ))?;
    let rows = stmt.query_map([assignee], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_tasks(conn: &Connection) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TASK_COLUMNS} FROM tasks ORDER BY task_id ASC"
    ))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Set `is_user_done`; returns the number of rows touched (0 or 1).
pub fn set_assignee_done(conn: &Connection, task_id: i64) -> Result<usize> {
    conn.execute(
        "UPDATE tasks SET is_user_done = 1 WHERE task_id = ?1",
        [task_id],
    )
}

/// Set `is_admin_done`; returns the number of rows touched (0 or 1).
pub fn set_approver_done(conn: &Connection, task_id: i64) -> Result<usize> {
    conn.execute(
        "UPDATE tasks SET is_admin_done = 1 WHERE task_id = ?1",
        [task_id],
    )
}
