use crate::errors::AppError;
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<AttendanceRecord> {
    let status_str: String = row.get("status")?;
    let status = AttendanceStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAttendanceStatus(status_str.clone())),
        )
    })?;

    Ok(AttendanceRecord {
        id: row.get("id")?,
        user: row.get("user_name")?,
        date: row.get("date")?,
        status,
    })
}

/// Append one attendance row and return its id.
pub fn insert_attendance(
    conn: &Connection,
    user: &str,
    date: &str,
    status: AttendanceStatus,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO attendance (user_name, date, status) VALUES (?1, ?2, ?3)",
        params![user, date, status.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All rows of a user, in the order they were written.
pub fn load_attendance_for(conn: &Connection, user: &str) -> Result<Vec<AttendanceRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_name, date, status FROM attendance
         WHERE user_name = ?1
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([user], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_attendance(conn: &Connection) -> Result<Vec<AttendanceRecord>> {
    let mut stmt =
        conn.prepare("SELECT id, user_name, date, status FROM attendance ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
