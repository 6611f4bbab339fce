use serde::Serialize;
use std::fmt;

/// Presence state of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    LoggedIn,
    LoggedOut,
    Afk,
}

impl Status {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::LoggedIn => "Logged In",
            Status::LoggedOut => "Logged Out",
            Status::Afk => "AFK",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Logged In" => Some(Status::LoggedIn),
            "Logged Out" => Some(Status::LoggedOut),
            "AFK" => Some(Status::Afk),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// The single status row kept for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeStatus {
    pub user: String,
    pub status: Status,
    pub afk_reason: Option<String>,
}

impl EmployeeStatus {
    /// Build a row, dropping the reason unless the status is AFK.
    pub fn new(user: &str, status: Status, afk_reason: Option<&str>) -> Self {
        let afk_reason = match status {
            Status::Afk => afk_reason.map(str::to_string),
            Status::LoggedIn | Status::LoggedOut => None,
        };

        Self {
            user: user.to_string(),
            status,
            afk_reason,
        }
    }
}
