use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::status::{load_status, replace_status};
use crate::errors::{AppError, AppResult};
use crate::models::status::{EmployeeStatus, Status};

pub struct StatusLogic;

impl StatusLogic {
    /// Replace the user's status row.
    ///
    /// The reason is kept only for `Status::Afk`; logging in or out always
    /// clears a previous AFK reason.
    pub fn set(
        pool: &mut DbPool,
        user: &str,
        status: Status,
        afk_reason: Option<&str>,
    ) -> AppResult<EmployeeStatus> {
        let row = EmployeeStatus::new(user, status, afk_reason);

        pool.with_tx(|tx| {
            replace_status(tx, &row)?;

            let msg = match &row.afk_reason {
                Some(reason) => format!("{} ({})", row.status, reason),
                None => row.status.to_string(),
            };
            ttlog(tx, "status", user, &msg)?;

            Ok(())
        })?;

        Ok(row)
    }

    /// Point lookup; `AppError::NoStatus` when the user never set a status.
    pub fn get(pool: &mut DbPool, user: &str) -> AppResult<EmployeeStatus> {
        pool.with_tx(|tx| {
            load_status(tx, user)?.ok_or_else(|| AppError::NoStatus(user.to_string()))
        })
    }
}
