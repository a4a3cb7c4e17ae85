use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The kind of a task, with its kind-specific date.
///
/// Dates are kept exactly as the user typed them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { at: String },
}

impl TaskKind {
    /// Single-letter tag shown in the rendered task.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

/// Represents a single task in the list.
///
/// The description is fixed at creation. `completed` and `archived` only
/// ever go from `false` to `true`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    #[serde(flatten)]
    kind: TaskKind,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    archived: bool,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Task {
            description: description.into(),
            kind,
            completed: false,
            archived: false,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Task::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Self {
        Task::new(description, TaskKind::Deadline { by: by.into() })
    }

    pub fn event(description: impl Into<String>, at: impl Into<String>) -> Self {
        Task::new(description, TaskKind::Event { at: at.into() })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    /// Marks the task as done. Calling it again is a no-op.
    pub fn mark_done(&mut self) {
        self.completed = true;
    }

    pub fn mark_archived(&mut self) {
        self.archived = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { '✓' } else { '✗' };
        write!(f, "[{}][{}] {}", self.kind.tag(), status, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { at } => write!(f, " (at: {})", at),
        }
    }
}

/// A task moved out of the active list, as written to the archive file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ArchiveEntry {
    pub task: Task,
    /// When the task was archived, stored as RFC 3339.
    pub archived_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_kind() {
        assert_eq!(Task::todo("borrow book").to_string(), "[T][✗] borrow book");
        assert_eq!(
            Task::deadline("return book", "Sunday").to_string(),
            "[D][✗] return book (by: Sunday)"
        );
        assert_eq!(
            Task::event("project meeting", "Mon 2-4pm").to_string(),
            "[E][✗] project meeting (at: Mon 2-4pm)"
        );
    }

    #[test]
    fn done_shows_check_mark_and_archive_does_not_change_rendering() {
        let mut task = Task::deadline("return book", "Sunday");
        task.mark_done();
        assert_eq!(task.to_string(), "[D][✓] return book (by: Sunday)");

        task.mark_archived();
        assert!(task.is_archived());
        assert_eq!(task.to_string(), "[D][✓] return book (by: Sunday)");
    }

    #[test]
    fn serializes_kind_inline() {
        let task = Task::event("party", "Friday");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "event");
        assert_eq!(json["at"], "Friday");
        assert_eq!(json["description"], "party");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
        assert_eq!(
            back.kind(),
            &TaskKind::Event {
                at: "Friday".into()
            }
        );
    }

    #[test]
    fn archive_entry_keeps_timestamp() {
        let entry = ArchiveEntry {
            task: Task::todo("old"),
            archived_at: Local::now(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ArchiveEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.archived_at, entry.archived_at);
        assert_eq!(back.task.kind(), &TaskKind::Todo);
    }

    #[test]
    fn missing_flags_default_to_false() {
        let task: Task =
            serde_json::from_str(r#"{"description":"read","type":"todo"}"#).unwrap();
        assert!(!task.is_completed());
        assert!(!task.is_archived());
    }
}
