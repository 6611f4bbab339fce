//! Text replies sent back to the chat.

use crate::bot::command::COMMANDS;
use crate::errors::AppError;
use crate::models::attendance::AttendanceRecord;
use crate::models::status::{EmployeeStatus, Status};
use crate::models::task::Task;

pub fn mention(user: &str) -> String {
    format!("@{user}")
}

pub fn status_changed(row: &EmployeeStatus) -> String {
    let who = mention(&row.user);
    match row.status {
        Status::LoggedIn => format!("✅ {who} is now **logged in**."),
        Status::LoggedOut => format!("✅ {who} is now **logged out**."),
        Status::Afk => format!(
            "🚀 {who} is **AFK**: {}",
            row.afk_reason.as_deref().unwrap_or_default()
        ),
    }
}

pub fn status_report(row: &EmployeeStatus) -> String {
    let mut out = format!("🛠 **{}** is currently **{}**", row.user, row.status);
    if let Some(reason) = &row.afk_reason {
        out.push_str(&format!(" (AFK Reason: {reason})"));
    }
    out
}

/// Echoes the status as the user typed it; the stored value is normalised.
pub fn attendance_marked(rec: &AttendanceRecord, typed: &str) -> String {
    format!(
        "✅ Attendance marked as **{}** for {}.",
        typed.trim(),
        mention(&rec.user)
    )
}

pub fn attendance_report(user: &str, records: &[AttendanceRecord]) -> String {
    let mut out = format!("📅 **Attendance Report for {user}**\n");
    for rec in records {
        out.push_str(&format!("📍 {} - {}\n", rec.date, rec.status.label()));
    }
    out
}

pub fn task_assigned(id: i64, assignee: &str, description: &str, deadline: &str) -> String {
    format!(
        "✅ Task {id} assigned to {}: {description} (Deadline: {deadline})",
        mention(assignee)
    )
}

pub fn task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "🎉 You have no pending tasks!".to_string();
    }

    let mut out = String::from("**📝 Your Tasks:**\n");
    for t in tasks {
        out.push_str(&format!(
            "🔹 Task ID: {} | {} | ⏰ {} | Status: {}\n",
            t.id,
            t.description,
            t.deadline,
            t.state().label()
        ));
    }
    out
}

pub fn task_done(id: i64) -> String {
    format!("✅ Task {id} marked as completed. Awaiting admin approval.")
}

pub fn task_approved(id: i64, by: &str) -> String {
    format!("✅ Task {id} approved by {}!", mention(by))
}

pub fn help(prefix: &str) -> String {
    let mut out = String::from("**📖 Commands:**\n");
    for (name, usage, summary) in COMMANDS {
        let sig = if usage.is_empty() {
            format!("{prefix}{name}")
        } else {
            format!("{prefix}{name} {usage}")
        };
        out.push_str(&format!("`{sig}` - {summary}\n"));
    }
    out
}

/// Turn a failed command into the text the user sees.
pub fn error(err: &AppError) -> String {
    match err {
        AppError::InvalidAttendanceStatus(_) => {
            "❌ Invalid status! Use `present` or `absent`.".to_string()
        }
        AppError::NoStatus(user) => format!("⚠ No status found for {user}."),
        AppError::NoAttendance(user) => format!("❌ No attendance records found for {user}."),
        AppError::TaskNotFound(id) => format!("❌ Task {id} not found."),
        AppError::NotApprover(user) => {
            format!("⛔ {} is not allowed to approve tasks.", mention(user))
        }
        AppError::Usage(msg) => format!("❌ {msg}"),
        _ => "⚠️ Something went wrong while handling that command. Please try again later."
            .to_string(),
    }
}
