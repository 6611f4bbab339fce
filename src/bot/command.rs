use crate::bot::args::Args;
use crate::errors::{AppError, AppResult};

/// Every chat command the bot understands, with its parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login,
    Logout,
    Afk {
        reason: String,
    },
    Status {
        user: Option<String>,
    },
    MarkAttendance {
        status: String,
    },
    AttendanceReport {
        user: Option<String>,
    },
    AssignTask {
        assignee: String,
        deadline: String,
        description: String,
    },
    MyTasks,
    MarkDone {
        task_id: i64,
    },
    ApproveTask {
        task_id: i64,
    },
    Help,
}

/// (name, usage, summary) for the help listing.
pub const COMMANDS: [(&str, &str, &str); 11] = [
    ("login", "", "Mark yourself as logged in"),
    ("logout", "", "Mark yourself as logged out"),
    ("afk", "<reason>", "Mark yourself as away, with a reason"),
    ("status", "[@user]", "Show your status or someone else's"),
    ("mark_attendance", "<present|absent>", "Record today's attendance"),
    ("attendance_report", "[@user]", "List attendance records"),
    ("assign_task", "<@user> <deadline> <description>", "Assign a task"),
    ("my_tasks", "", "List tasks assigned to you"),
    ("mark_done", "<task_id>", "Mark one of your tasks as done"),
    ("approve_task", "<task_id>", "Approve a finished task"),
    ("help", "", "Show this list"),
];

impl Command {
    /// Parse a message body.
    ///
    /// Returns `Ok(None)` when the text does not start with `prefix` (not
    /// meant for the bot). Unknown names and bad arguments are `Usage` errors.
    pub fn parse(prefix: &str, content: &str) -> AppResult<Option<Command>> {
        let Some(body) = content.trim_start().strip_prefix(prefix) else {
            return Ok(None);
        };

        let body = body.trim_start();
        let (name, tail) = match body.find(char::is_whitespace) {
            Some(i) => (&body[..i], &body[i..]),
            None => (body, ""),
        };

        if name.is_empty() {
            return Ok(None);
        }

        let mut args = Args::new(tail);

        let cmd = match name {
            "login" => Command::Login,
            "logout" => Command::Logout,
            "afk" => Command::Afk {
                reason: args.rest("reason")?,
            },
            "status" => Command::Status {
                user: args.optional_user("member")?,
            },
            "mark_attendance" => Command::MarkAttendance {
                status: args.required("status")?,
            },
            "attendance_report" => Command::AttendanceReport {
                user: args.optional_user("member")?,
            },
            "assign_task" => Command::AssignTask {
                assignee: args.required_user("member")?,
                deadline: args.required("deadline")?,
                description: args.rest("task_desc")?,
            },
            "my_tasks" => Command::MyTasks,
            "mark_done" => Command::MarkDone {
                task_id: args.required_int("task_id")?,
            },
            "approve_task" => Command::ApproveTask {
                task_id: args.required_int("task_id")?,
            },
            "help" => Command::Help,
            other => {
                return Err(AppError::Usage(format!(
                    "Unknown command `{other}`. Type `{prefix}help` for the list of commands."
                )));
            }
        };

        Ok(Some(cmd))
    }
}
