use std::io::{self, Write};

use tracing::debug;

use crate::runtime::interpreter::evaluate;

pub const BANNER: &str = "Enter the expression";
pub const NEXT_PROMPT: &str = "Enter the next expression (or '0' for exit):";
pub const FAREWELL: &str = "Goodbye.";
pub const EXIT_SENTINEL: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Exit,
    Value(String),
    Error(String),
}

impl Response {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Exit => None,
            Self::Value(x) | Self::Error(x) => Some(x),
        }
    }
}

/// Turns one input line into the line to display. Evaluation errors become
/// `Error:` replies and never end the session.
pub fn respond(line: &str) -> Response {
    if line == EXIT_SENTINEL {
        return Response::Exit;
    }

    reply(line)
}

/// Evaluates `line` without treating it as a session command.
pub fn reply(line: &str) -> Response {
    match evaluate(line) {
        Ok(value) => Response::Value(format!("Result: {value}")),
        Err(err) => {
            debug!(line, ?err, "rejected expression");
            Response::Error(format!("Error: {err}"))
        }
    }
}

/// Drives a whole session: the banner, one reply and prompt per line, then
/// the farewell once the sentinel is read or `lines` runs out.
pub fn run<I, W>(lines: I, out: &mut W) -> io::Result<()>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    writeln!(out, "{BANNER}")?;

    for line in lines {
        let response = respond(&line);
        let Some(text) = response.text() else {
            break;
        };
        writeln!(out, "{text}")?;
        writeln!(out, "{NEXT_PROMPT}")?;
    }

    writeln!(out, "{FAREWELL}")
}
