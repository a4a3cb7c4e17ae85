//! # taskchat
//!
//! A line-driven task tracker for the terminal. Run it without arguments and
//! type commands, one per line:
//!
//! ```text
//! todo borrow book
//! deadline return book /by Sunday
//! event project meeting /at Mon 2-4pm
//! list
//! done 1
//! find book
//! archive 2
//! delete 1
//! bye
//! ```
//!
//! ## Data Storage
//!
//! Tasks are saved in your local data directory:
//! *   Linux: `~/.local/share/taskchat/tasks.json`
//! *   macOS: `~/Library/Application Support/taskchat/tasks.json`
//! *   Windows: `%APPDATA%\taskchat\tasks.json`
//!
//! Archived tasks go to `archive.json` next to it. Override the directory
//! with `--db <DIR>` or the `TASKCHAT_DB` environment variable.
//!
//! ## Logging
//!
//! Diagnostics go to stderr. Set `TASKCHAT_LOG` (e.g. `TASKCHAT_LOG=debug`)
//! to change the level; the default is `warn`.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use tracing_subscriber::EnvFilter;

use taskchat::chat::chat_loop;
use taskchat::commands::TaskList;
use taskchat::storage::{default_dir, Storage};

#[derive(Parser)]
#[command(name = "taskchat")]
#[command(about = "Line-driven personal task tracker", long_about = None)]
struct Cli {
    /// Directory holding tasks.json and archive.json
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Chat,
    /// Show archived tasks
    Archived,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TASKCHAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let storage = Storage::new(cli.db.unwrap_or_else(default_dir));

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "taskchat", &mut io::stdout());
            Ok(())
        }
        Some(Commands::Archived) => cmd_archived(&storage),
        Some(Commands::Chat) | None => cmd_chat(storage),
    }
}

fn cmd_chat(storage: Storage) -> Result<()> {
    let path = storage.tasks_path();
    let mut tasks = TaskList::open(storage)
        .with_context(|| format!("Failed to load tasks from {}", path.display()))?;

    let mut stdout = io::stdout();
    writeln!(stdout, "Hello! What can I do for you?")?;
    chat_loop(&mut tasks, io::stdin().lock(), &mut stdout).context("Chat session failed")?;
    Ok(())
}

/// Prints the archive as a table, oldest first.
fn cmd_archived(storage: &Storage) -> Result<()> {
    let archive = storage.load_archive().with_context(|| {
        format!(
            "Failed to load archive from {}",
            storage.archive_path().display()
        )
    })?;
    if archive.is_empty() {
        println!("No archived tasks.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Archived at").add_attribute(Attribute::Bold),
        ]);
    for (i, entry) in archive.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.task),
            Cell::new(entry.archived_at.format("%Y-%m-%d %H:%M")),
        ]);
    }
    println!("{table}");
    Ok(())
}
