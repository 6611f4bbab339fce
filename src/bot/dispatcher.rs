use crate::bot::command::Command;
use crate::bot::message::Message;
use crate::bot::reply;
use crate::config::Config;
use crate::core::attendance::AttendanceLogic;
use crate::core::status::StatusLogic;
use crate::core::tasks::TaskLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::status::Status;
use crate::ui::messages::error;
use crate::utils::date;
use chrono::NaiveDate;

/// Maps chat messages to store operations.
///
/// Owns the store handle it was built with; every command runs exactly one
/// transaction and gets a text reply, failures included.
pub struct Dispatcher {
    pool: DbPool,
    prefix: String,
    approvers: Vec<String>,
    fixed_date: Option<NaiveDate>,
}

impl Dispatcher {
    pub fn new(pool: DbPool, cfg: &Config) -> Self {
        Self {
            pool,
            prefix: cfg.command_prefix.clone(),
            approvers: cfg.approvers.clone(),
            fixed_date: None,
        }
    }

    /// Use `date` instead of the local calendar day for attendance.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    pub fn pool_mut(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Handle one inbound message.
    /// `None` means the message was not addressed to the bot.
    pub fn handle(&mut self, msg: &Message) -> Option<String> {
        let cmd = match Command::parse(&self.prefix, &msg.content) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return None,
            Err(e) => return Some(reply::error(&e)),
        };

        match self.execute(&msg.author, cmd) {
            Ok(text) => Some(text),
            Err(e) => {
                if !e.is_user_facing() {
                    error(format!("{} failed: {e}", msg.content.trim()));
                }
                Some(reply::error(&e))
            }
        }
    }

    fn day_string(fixed: Option<NaiveDate>) -> String {
        fixed
            .unwrap_or_else(date::today)
            .format("%Y-%m-%d")
            .to_string()
    }

    fn execute(&mut self, author: &str, cmd: Command) -> AppResult<String> {
        let pool = &mut self.pool;

        match cmd {
            Command::Login => {
                let row = StatusLogic::set(pool, author, Status::LoggedIn, None)?;
                Ok(reply::status_changed(&row))
            }
            Command::Logout => {
                let row = StatusLogic::set(pool, author, Status::LoggedOut, None)?;
                Ok(reply::status_changed(&row))
            }
            Command::Afk { reason } => {
                let row = StatusLogic::set(pool, author, Status::Afk, Some(&reason))?;
                Ok(reply::status_changed(&row))
            }
            Command::Status { user } => {
                let user = user.as_deref().unwrap_or(author);
                let row = StatusLogic::get(pool, user)?;
                Ok(reply::status_report(&row))
            }
            Command::MarkAttendance { status } => {
                let today = Self::day_string(self.fixed_date);
                let rec = AttendanceLogic::mark(pool, author, &today, &status)?;
                Ok(reply::attendance_marked(&rec, &status))
            }
            Command::AttendanceReport { user } => {
                let user = user.as_deref().unwrap_or(author);
                let records = AttendanceLogic::report(pool, user)?;
                Ok(reply::attendance_report(user, &records))
            }
            Command::AssignTask {
                assignee,
                deadline,
                description,
            } => {
                let id = TaskLogic::assign(pool, author, &assignee, &deadline, &description)?;
                Ok(reply::task_assigned(id, &assignee, &description, &deadline))
            }
            Command::MyTasks => {
                let tasks = TaskLogic::list_for(pool, author)?;
                Ok(reply::task_list(&tasks))
            }
            Command::MarkDone { task_id } => {
                TaskLogic::mark_assignee_done(pool, task_id, author)?;
                Ok(reply::task_done(task_id))
            }
            Command::ApproveTask { task_id } => {
                TaskLogic::mark_approved(pool, task_id, author, &self.approvers)?;
                Ok(reply::task_approved(task_id, author))
            }
            Command::Help => Ok(reply::help(&self.prefix)),
        }
    }
}
