//! Turns a raw input line into a validated [`Command`].

use crate::error::{ChatError, Result};

/// A parsed, validated command. Indices are 1-based as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Todo { description: String },
    Deadline { description: String, by: String },
    Event { description: String, at: String },
    List,
    Delete { index: usize },
    Done { index: usize },
    Find { query: String },
    Archive { index: usize },
    Bye,
}

impl Command {
    /// The keyword that introduces this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Todo { .. } => "todo",
            Command::Deadline { .. } => "deadline",
            Command::Event { .. } => "event",
            Command::List => "list",
            Command::Delete { .. } => "delete",
            Command::Done { .. } => "done",
            Command::Find { .. } => "find",
            Command::Archive { .. } => "archive",
            Command::Bye => "bye",
        }
    }
}

const EMPTY_DESCRIPTION: &str = "description cannot be empty";
const EMPTY_DATE: &str = "date cannot be empty";
const TOO_MANY_DATES: &str = "too many date arguments";

/// Parses one line of user input.
///
/// The keyword is everything up to the first whitespace; the rest is trimmed
/// and interpreted per command. Unknown keywords yield
/// [`ChatError::InvalidInput`] carrying `line` unchanged.
pub fn parse(line: &str) -> Result<Command> {
    let trimmed = line.trim_start();
    let (keyword, rest) = match trimmed.find(char::is_whitespace) {
        Some(pos) => (&trimmed[..pos], trimmed[pos..].trim()),
        None => (trimmed, ""),
    };

    match keyword {
        "todo" => {
            if rest.is_empty() {
                return Err(ChatError::invalid_arguments(keyword, EMPTY_DESCRIPTION));
            }
            Ok(Command::Todo {
                description: rest.to_string(),
            })
        }
        "deadline" => {
            let (description, by) = split_dated(keyword, rest, "/by")?;
            Ok(Command::Deadline { description, by })
        }
        "event" => {
            let (description, at) = split_dated(keyword, rest, "/at")?;
            Ok(Command::Event { description, at })
        }
        "list" => Ok(Command::List),
        "delete" => Ok(Command::Delete {
            index: parse_index(keyword, rest)?,
        }),
        "done" => Ok(Command::Done {
            index: parse_index(keyword, rest)?,
        }),
        "archive" => Ok(Command::Archive {
            index: parse_index(keyword, rest)?,
        }),
        "find" => {
            if rest.is_empty() {
                return Err(ChatError::invalid_arguments(
                    keyword,
                    "search text cannot be empty",
                ));
            }
            Ok(Command::Find {
                query: rest.to_string(),
            })
        }
        "bye" => Ok(Command::Bye),
        _ => Err(ChatError::InvalidInput(line.to_string())),
    }
}

/// Splits `<description> <marker> <date>` into its two halves.
///
/// The marker only counts as a whole word, so `/byte` inside a description
/// is plain text.
fn split_dated(command: &str, rest: &str, marker: &str) -> Result<(String, String)> {
    if rest.is_empty() {
        return Err(ChatError::invalid_arguments(command, EMPTY_DESCRIPTION));
    }

    let positions = marker_positions(rest, marker);
    let pos = match positions.as_slice() {
        [] => return Err(ChatError::invalid_arguments(command, EMPTY_DATE)),
        [pos] => *pos,
        _ => return Err(ChatError::invalid_arguments(command, TOO_MANY_DATES)),
    };

    let description = rest[..pos].trim();
    let date = rest[pos + marker.len()..].trim();

    if description.is_empty() {
        return Err(ChatError::invalid_arguments(command, EMPTY_DESCRIPTION));
    }
    if date.is_empty() {
        return Err(ChatError::invalid_arguments(command, EMPTY_DATE));
    }
    Ok((description.to_string(), date.to_string()))
}

/// Byte offsets of `marker` where it stands alone between whitespace.
fn marker_positions(text: &str, marker: &str) -> Vec<usize> {
    text.match_indices(marker)
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            let before = text[..pos].chars().next_back();
            let after = text[pos + marker.len()..].chars().next();
            before.map_or(true, char::is_whitespace) && after.map_or(true, char::is_whitespace)
        })
        .collect()
}

fn parse_index(command: &str, rest: &str) -> Result<usize> {
    if rest.is_empty() {
        return Err(ChatError::invalid_arguments(command, "index cannot be empty"));
    }
    rest.parse::<usize>()
        .map_err(|_| ChatError::invalid_arguments(command, "index must be a positive number"))
}
