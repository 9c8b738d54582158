use crate::libs::messages::Message;

/// Outcome of a mutating request, carried to the listing page in the
/// `notice` query parameter after the redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    TaskAdded,
    TaskUpdated,
    TaskCompleted,
    TaskDeleted,
    TaskNotFound,
}

impl Notice {
    pub fn key(&self) -> &'static str {
        match self {
            Notice::TaskAdded => "task_added",
            Notice::TaskUpdated => "task_updated",
            Notice::TaskCompleted => "task_completed",
            Notice::TaskDeleted => "task_deleted",
            Notice::TaskNotFound => "task_not_found",
        }
    }

    /// Unknown keys are ignored rather than rejected.
    pub fn from_key(key: &str) -> Option<Notice> {
        match key {
            "task_added" => Some(Notice::TaskAdded),
            "task_updated" => Some(Notice::TaskUpdated),
            "task_completed" => Some(Notice::TaskCompleted),
            "task_deleted" => Some(Notice::TaskDeleted),
            "task_not_found" => Some(Notice::TaskNotFound),
            _ => None,
        }
    }

    pub fn banner(&self) -> Banner {
        let message = match self {
            Notice::TaskAdded => Message::TaskAdded,
            Notice::TaskUpdated => Message::TaskUpdated,
            Notice::TaskCompleted => Message::TaskCompleted,
            Notice::TaskDeleted => Message::TaskDeleted,
            Notice::TaskNotFound => Message::TaskNotFound,
        };
        Banner {
            text: message.to_string(),
            is_error: *self == Notice::TaskNotFound,
        }
    }

    /// Location of the listing page showing this notice.
    pub fn redirect_target(&self) -> String {
        format!("/?notice={}", self.key())
    }
}

/// A success or error line shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub is_error: bool,
}

impl Banner {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}
