use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub assigner: String,
    pub assignee: String,
    pub description: String,
    pub deadline: String,
    pub assignee_done: bool,
    pub approver_done: bool,
}

/// What a task shows as in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Completed,
}

impl Task {
    /// A task is complete only once both the assignee and an approver
    /// have signed it off.
    pub fn is_completed(&self) -> bool {
        self.assignee_done && self.approver_done
    }

    pub fn state(&self) -> TaskState {
        if self.is_completed() {
            TaskState::Completed
        } else {
            TaskState::Pending
        }
    }
}

impl TaskState {
    pub fn label(&self) -> &'static str {
        match self {
            TaskState::Pending => "⏳ Pending",
            TaskState::Completed => "✅ Completed",
        }
    }
}
