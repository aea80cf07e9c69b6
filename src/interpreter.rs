// ABOUTME: Interpreter state shared across statements: the environment, the
// ABOUTME: function currently having its body loaded, and the return signal

use crate::conditional;
use crate::env::Environment;
use crate::error::InterpError;
use crate::eval;
use crate::token;
use crate::value::{FunctionData, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything a running program carries between lines.
///
/// `loading_function` is set the moment a `with ... function.` definition is
/// evaluated and cleared as soon as a non-indented line is seen — it is how
/// the dispatcher knows whether the next indented line is a body statement
/// to append, or a syntax error with nothing to attach to.
pub struct InterpreterState {
    pub env: Environment,
    pub loading_function: Option<Rc<RefCell<FunctionData>>>,
    pub return_value: Option<Value>,
    /// Depth of `Run` invocations currently on the stack. A plain boolean
    /// would get clobbered by a nested call (a function calling another
    /// function) clearing it on the inner call's exit while the outer call
    /// is still executing, so this counts instead: `return` is legal exactly
    /// when this is greater than zero.
    pub call_depth: usize,
}

impl InterpreterState {
    pub fn new() -> Self {
        InterpreterState {
            env: Environment::new(),
            loading_function: None,
            return_value: None,
            call_depth: 0,
        }
    }

    pub fn in_function(&self) -> bool {
        self.call_depth > 0
    }

    /// Dispatch one already-period-stripped-and-untokenized source line.
    /// Returns the statement's value for callers (tests, a REPL) that want
    /// it; the driver itself only cares whether an error was raised.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Value>, InterpError> {
        let tokens = token::tokenize_line(line).map_err(InterpError::syntax)?;

        let indented = tokens.first().map(|t| t.is_empty()).unwrap_or(false);

        if indented {
            return match &self.loading_function {
                Some(func) => {
                    func.borrow_mut().body.push(tokens[1..].to_vec());
                    Ok(None)
                }
                None => Err(InterpError::syntax(
                    "Unexpected indentation outside a function body",
                )),
            };
        }

        // A top-level line ends the block being loaded, if any.
        self.loading_function = None;

        if tokens.first().map(|t| t.as_str()) == Some(token::CONDITIONAL_KEYWORD) {
            conditional::evaluate_conditional(&tokens, self).map(Some)
        } else {
            eval::evaluate(&tokens, self).map(Some)
        }
    }
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new()
    }
}
