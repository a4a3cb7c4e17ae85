use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{ArchiveEntry, Task};

/// Environment variable that overrides the storage directory.
pub const DB_ENV: &str = "TASKCHAT_DB";

const TASKS_FILE: &str = "tasks.json";
const ARCHIVE_FILE: &str = "archive.json";

/// Returns the default storage directory.
///
/// The directory is determined in the following order:
/// 1. `TASKCHAT_DB` environment variable.
/// 2. `~/.local/share/taskchat` (on Linux).
/// 3. `.` (fallback).
pub fn default_dir() -> PathBuf {
    std::env::var(DB_ENV).map(PathBuf::from).unwrap_or_else(|_| {
        let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("taskchat");
        p
    })
}

/// JSON-file persistence for the active task list and the archive.
///
/// Both files live in one directory: `tasks.json` holds the active list and
/// `archive.json` accumulates archived tasks.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Storage { dir: dir.into() }
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.dir.join(ARCHIVE_FILE)
    }

    /// Loads the active task list.
    ///
    /// A missing file is an empty list. An unreadable or corrupt file is an
    /// error so that it is never silently overwritten.
    pub fn load_tasks(&self) -> Result<Vec<Task>> {
        read_json(&self.tasks_path())
    }

    /// Saves the active task list, overwriting the existing file.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        write_json(&self.tasks_path(), tasks)?;
        debug!(count = tasks.len(), path = %self.tasks_path().display(), "saved tasks");
        Ok(())
    }

    /// Loads all archived entries, oldest first.
    pub fn load_archive(&self) -> Result<Vec<ArchiveEntry>> {
        read_json(&self.archive_path())
    }

    /// Appends a task to the archive file, stamped with the current time.
    pub fn archive_task(&self, task: &Task) -> Result<()> {
        let mut archive = self.load_archive()?;
        archive.push(ArchiveEntry {
            task: task.clone(),
            archived_at: Local::now(),
        });
        write_json(&self.archive_path(), &archive)?;
        debug!(total = archive.len(), "archived task");
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut f = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut s = String::new();
    f.read_to_string(&mut s)?;
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&s)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let s = serde_json::to_string_pretty(value)?;
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
