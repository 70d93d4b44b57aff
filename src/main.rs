use std::{io, process::ExitCode};

use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;
use tracing::debug;

use crate::session::{Response, reply};

pub mod ast;
pub mod lexer;
pub mod logger;
pub mod numerals;
pub mod parser;
pub mod runtime;
pub mod session;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error input: {0}")]
    Input(ReadlineError),
    #[error("Error output: {0}")]
    Output(io::Error),
}

impl From<ReadlineError> for AppError {
    fn from(value: ReadlineError) -> Self {
        Self::Input(value)
    }
}

impl From<io::Error> for AppError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

fn repl() -> Result<(), AppError> {
    let mut editor = DefaultEditor::new()?;
    let mut failure = None;

    let lines = std::iter::from_fn(|| match editor.readline(">> ") {
        Ok(line) => {
            if !line.trim().is_empty() {
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    debug!(%err, "could not add history entry");
                }
            }
            Some(line)
        }
        Err(ReadlineError::Interrupted) => {
            debug!("interrupted");
            None
        }
        // End of input says goodbye the same way the sentinel does.
        Err(ReadlineError::Eof) => {
            debug!("end of input");
            None
        }
        Err(err) => {
            failure = Some(err);
            None
        }
    });

    session::run(lines, &mut io::stdout())?;

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// One-shot mode has no session, so `0` is evaluated like any other text.
fn once(expression: &str) -> ExitCode {
    let response = reply(expression);
    if let Some(text) = response.text() {
        println!("{text}");
    }

    match response {
        Response::Value(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Calculator for one `operand operator operand` expression at a time, with
/// operands from 1 to 10 written in Arabic or Roman numerals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits.
    #[arg(short, long, allow_hyphen_values = true)]
    expression: Option<String>,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    if let Some(expression) = args.expression {
        return once(&expression);
    }

    match repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
