// ABOUTME: File-reading driver — reads a .nl source file, dispatches each
// ABOUTME: line, and reports per-line errors without aborting the run

use crate::config;
use crate::error::InterpError;
use crate::interpreter::InterpreterState;
use std::fs;
use std::path::Path;

/// Run every statement in `path` against a fresh interpreter state.
pub fn run_file(path: &Path) -> Result<(), String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read source file {}: {}", path.display(), e))?;
    run_source(&contents);
    Ok(())
}

/// Run every statement in a source string against a fresh interpreter
/// state. A failure on one line is reported and execution continues with
/// the next line — matching the source driver's per-line try/catch, not an
/// all-or-nothing script run.
pub fn run_source(source: &str) {
    let mut interp = InterpreterState::new();

    for (index, raw_line) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            continue;
        }
        if line.trim_start().starts_with("//") {
            continue;
        }

        if let Err(err) = interp.process_line(line) {
            report(line_no, &err);
        }
    }
}

fn report(line_no: usize, err: &InterpError) {
    match err {
        InterpError::Syntax(msg) => {
            println!("{} {}: {}", config::SYNTAX_ERROR_PREFIX, line_no, msg)
        }
        InterpError::Type(msg) => println!("{} {}: {}", config::TYPE_ERROR_PREFIX, line_no, msg),
        InterpError::Runtime(msg) => {
            println!("{} {}: {}", config::RUNTIME_ERROR_PREFIX, line_no, msg)
        }
        InterpError::Unknown(msg) => println!("{} {}", config::UNKNOWN_ERROR_PREFIX, msg),
    }
}
