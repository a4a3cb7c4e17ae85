use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands::TaskList;
use crate::error::Result;
use crate::parser::{parse, Command};

/// Handles one line of input and returns the response text.
///
/// Errors are turned into their display text. The flag is `true` when the
/// line was `bye`.
pub fn respond(tasks: &mut TaskList, line: &str) -> (String, bool) {
    match parse(line) {
        Ok(command) => {
            let is_bye = command == Command::Bye;
            match tasks.execute(command) {
                Ok(response) => (response, is_bye),
                Err(e) => (e.to_string(), false),
            }
        }
        Err(e) => {
            debug!(error = %e, "rejected input");
            (e.to_string(), false)
        }
    }
}

/// Reads commands from `input` and writes one response block per line to
/// `output`, each followed by a newline.
///
/// Stops after answering `bye` or at end of input. Only I/O errors on the
/// streams end the loop early; bytes that are not valid UTF-8 are replaced
/// and the line is answered like any other.
pub fn chat_loop<R: BufRead, W: Write>(
    tasks: &mut TaskList,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.strip_suffix('\n').unwrap_or(&raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (response, bye) = respond(tasks, line);
        writeln!(output, "{}", response)?;
        output.flush()?;
        if bye {
            break;
        }
    }
    Ok(())
}
