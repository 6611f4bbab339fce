use crate::db::attendance::{insert_attendance, load_attendance_for};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceStatus};

pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Validate `status` (case-insensitive `present` / `absent`) and append
    /// one row for `user` on `date`. Nothing is written on invalid input.
    pub fn mark(
        pool: &mut DbPool,
        user: &str,
        date: &str,
        status: &str,
    ) -> AppResult<AttendanceRecord> {
        let parsed = AttendanceStatus::parse(status)
            .ok_or_else(|| AppError::InvalidAttendanceStatus(status.to_string()))?;

        let id = pool.with_tx(|tx| {
            let id = insert_attendance(tx, user, date, parsed)?;
            ttlog(tx, "attendance", user, &format!("{date} {parsed}"))?;
            Ok(id)
        })?;

        Ok(AttendanceRecord {
            id,
            user: user.to_string(),
            date: date.to_string(),
            status: parsed,
        })
    }

    /// All rows of `user` in write order.
    /// An empty history is reported as `AppError::NoAttendance`.
    pub fn report(pool: &mut DbPool, user: &str) -> AppResult<Vec<AttendanceRecord>> {
        let records = pool.with_tx(|tx| Ok(load_attendance_for(tx, user)?))?;

        if records.is_empty() {
            return Err(AppError::NoAttendance(user.to_string()));
        }

        Ok(records)
    }
}
