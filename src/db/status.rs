use crate::errors::AppError;
use crate::models::status::{EmployeeStatus, Status};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<EmployeeStatus> {
    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidStatus(status_str.clone())),
        )
    })?;

    Ok(EmployeeStatus {
        user: row.get("user_name")?,
        status,
        afk_reason: row.get("afk_reason")?,
    })
}

/// Replace the whole status row of a user.
pub fn replace_status(conn: &Connection, row: &EmployeeStatus) -> Result<()> {
    conn.execute(
        "REPLACE INTO employee_status (user_name, status, afk_reason) VALUES (?1, ?2, ?3)",
        params![row.user, row.status.to_db_str(), row.afk_reason],
    )?;
    Ok(())
}

pub fn load_status(conn: &Connection, user: &str) -> Result<Option<EmployeeStatus>> {
    conn.query_row(
        "SELECT user_name, status, afk_reason FROM employee_status WHERE user_name = ?1",
        [user],
        map_row,
    )
    .optional()
}

pub fn load_all_statuses(conn: &Connection) -> Result<Vec<EmployeeStatus>> {
    let mut stmt = conn.prepare(
        "SELECT user_name, status, afk_reason FROM employee_status ORDER BY user_name ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
