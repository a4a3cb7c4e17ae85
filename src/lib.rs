//! # taskchat
//!
//! A line-driven personal task tracker. Each input line is a command:
//!
//! ```text
//! todo <description>
//! deadline <description> /by <date>
//! event <description> /at <date>
//! list
//! done <index>
//! delete <index>
//! find <substring>
//! archive <index>
//! bye
//! ```
//!
//! Indices are 1-based positions in the current list. Archived tasks leave
//! the list and are kept in a separate archive file.

pub mod chat;
pub mod commands;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;
