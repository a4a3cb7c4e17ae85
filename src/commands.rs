use tracing::{debug, warn};

use crate::error::{ChatError, Result};
use crate::models::Task;
use crate::parser::Command;
use crate::storage::Storage;

pub const FAREWELL: &str = "Bye. Hope to see you again soon!";
const FIND_HEADER: &str = "Here are the matching tasks in your list:";

/// The active task list for one session.
///
/// Tasks are addressed by their 1-based position, which shifts after every
/// delete or archive.
pub struct TaskList {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskList {
    /// Creates an empty list backed by `storage`.
    pub fn new(storage: Storage) -> Self {
        TaskList {
            tasks: Vec::new(),
            storage,
        }
    }

    /// Creates a list seeded with the tasks previously saved in `storage`.
    pub fn open(storage: Storage) -> Result<Self> {
        let tasks = storage.load_tasks()?;
        debug!(count = tasks.len(), "loaded tasks");
        Ok(TaskList { tasks, storage })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Applies a parsed command and returns the response text.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        debug!(command = command.name(), "executing command");
        match command {
            Command::Todo { description } => Ok(self.add(Task::todo(description))),
            Command::Deadline { description, by } => {
                Ok(self.add(Task::deadline(description, by)))
            }
            Command::Event { description, at } => {
                Ok(self.add(Task::event(description, at)))
            }
            Command::List => Ok(self.list()),
            Command::Delete { index } => self.delete(index),
            Command::Done { index } => self.done(index),
            Command::Find { query } => Ok(self.find(&query)),
            Command::Archive { index } => self.archive(index),
            Command::Bye => Ok(FAREWELL.to_string()),
        }
    }

    /// Appends a task.
    pub fn add(&mut self, task: Task) -> String {
        debug_assert!(!task.description().is_empty());
        let rendered = task.to_string();
        self.tasks.push(task);
        self.persist();
        format!(
            "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
            rendered,
            self.tasks.len()
        )
    }

    /// Renders every task as `{index}.{task}`, one per line.
    ///
    /// An empty list renders as an empty string.
    pub fn list(&self) -> String {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}.{}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn delete(&mut self, index: usize) -> Result<String> {
        let pos = self.position(index)?;
        let task = self.tasks.remove(pos);
        self.persist();
        Ok(format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
            task,
            self.tasks.len()
        ))
    }

    /// Marks a task as done. Marking a finished task again is not an error.
    pub fn done(&mut self, index: usize) -> Result<String> {
        let pos = self.position(index)?;
        self.tasks[pos].mark_done();
        let rendered = self.tasks[pos].to_string();
        self.persist();
        Ok(format!("Nice! I've marked this task as done:\n  {}", rendered))
    }

    /// Lists tasks whose description contains `query` (case-sensitive).
    ///
    /// Matches keep their position in the full list. With no matches only
    /// the header is returned.
    pub fn find(&self, query: &str) -> String {
        let mut out = String::from(FIND_HEADER);
        for (i, t) in self.tasks.iter().enumerate() {
            if t.description().contains(query) {
                out.push_str(&format!("\n{}.{}", i + 1, t));
            }
        }
        out
    }

    /// Moves a task from the active list into the archive.
    ///
    /// The task leaves the list even if the archive cannot be written; the
    /// failure is only logged and the task is then in neither file.
    pub fn archive(&mut self, index: usize) -> Result<String> {
        let pos = self.position(index)?;
        let mut task = self.tasks.remove(pos);
        task.mark_archived();
        if let Err(e) = self.storage.archive_task(&task) {
            warn!(
                error = %e,
                task = %task,
                "failed to write archive, task dropped from active list"
            );
        }
        self.persist();
        Ok(format!(
            "Got it. I've archived this task:\n  {}\nNow you have {} tasks in the list.",
            task,
            self.tasks.len()
        ))
    }

    /// Converts a 1-based index into a vector position.
    fn position(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(ChatError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save_tasks(&self.tasks) {
            warn!(error = %e, "failed to save tasks");
        }
    }
}
