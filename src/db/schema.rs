use rusqlite::{Connection, OptionalExtension, Result};

/// Names of every table the bot relies on.
pub const TABLES: [&str; 4] = ["attendance", "tasks", "employee_status", "log"];

/// Ensure that the `attendance` table exists.
/// Append-only: no uniqueness on (user_name, date).
fn ensure_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            user_name TEXT NOT NULL,
            date      TEXT NOT NULL,
            status    TEXT NOT NULL CHECK(status IN ('present','absent'))
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_user ON attendance(user_name);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `tasks` table exists.
fn ensure_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            task_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            assigned_by   TEXT NOT NULL,
            assigned_to   TEXT NOT NULL,
            task_desc     TEXT NOT NULL,
            deadline      TEXT NOT NULL,
            is_user_done  INTEGER NOT NULL DEFAULT 0,
            is_admin_done INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_assigned_to ON tasks(assigned_to);
        "#,
    )?;
    Ok(())
}

/// Ensure that the `employee_status` table exists (one row per user).
fn ensure_status_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employee_status (
            user_name  TEXT PRIMARY KEY,
            status     TEXT NOT NULL,
            afk_reason TEXT DEFAULT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table with the given name exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create every missing table. Existing tables and rows are left untouched,
/// so calling this on an initialised database is a no-op.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    ensure_attendance_table(conn)?;
    ensure_tasks_table(conn)?;
    ensure_status_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
