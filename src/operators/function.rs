// ABOUTME: Function construction ("with ... function"), argument binding
// ABOUTME: ("with" as a call), and invocation ("Run")

use crate::conditional;
use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::token;
use crate::value::{FunctionData, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// `with` serves two roles, distinguished by evaluating its left operand
/// rather than pattern-matching the raw left-hand tokens:
///
/// - `a function with n.` — the left operand resolves to the bare Word
///   `function`, so this constructs a new, bodyless `Function` and starts
///   the interpreter loading its body from the following indented lines.
/// - `square with 5.` — the left operand resolves to a bound `Function`
///   value, so this loads that function's call-site arguments, ready for
///   `Run` to execute.
pub fn op_with(
    left: &[String],
    right: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    let left_value = if left.is_empty() {
        None
    } else {
        Some(eval::evaluate(left, interp)?)
    };

    match left_value {
        Some(Value::Word(ref w)) if w == "function" => define_function(right, interp),
        Some(Value::Function(func)) => bind_call_arguments(func, right, interp),
        Some(other) => Err(InterpError::syntax(format!(
            "'with' needs the literal 'function' or a function name on its left, got {}",
            other
        ))),
        None => Err(InterpError::syntax("'with' needs a left-hand operand")),
    }
}

/// `right` holds only the parameter tokens — the `function` keyword was
/// already consumed as `with`'s left operand by the caller.
fn define_function(right: &[String], interp: &mut InterpreterState) -> Result<Value, InterpError> {
    let params = if right.is_empty() {
        Vec::new()
    } else {
        flatten_params(eval::evaluate(right, interp)?)
    };

    let func = Rc::new(RefCell::new(FunctionData::new(params)));
    interp.loading_function = Some(func.clone());
    Ok(Value::Function(func))
}

/// A `with`-definition's parameter list is a single resolved `Value`: either
/// a bare name (one parameter) or a comma-built `List` of names (several).
/// Flattening that one level is what makes `FunctionData::params` an
/// ordered list of names in both cases.
fn flatten_params(value: Value) -> Vec<String> {
    match value {
        Value::List(items) => items.into_iter().filter_map(word_name).collect(),
        other => word_name(other).into_iter().collect(),
    }
}

fn word_name(value: Value) -> Option<String> {
    match value {
        Value::Word(name) => Some(name),
        _ => None,
    }
}

fn bind_call_arguments(
    func: Rc<RefCell<FunctionData>>,
    right: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    let arg_value = eval::evaluate(right, interp)?;
    let values = match arg_value {
        Value::List(items) => items,
        other => vec![other],
    };
    func.borrow_mut().values = values;
    Ok(Value::Function(func))
}

/// `Run square with 5.` executes a function value already loaded with its
/// call-site arguments (by `with`, above): parameters are bound over a
/// snapshot of the environment, the body runs statement by statement until
/// one of them sets `return_value` or the body is exhausted, and the
/// environment is restored on every exit path, including an error raised
/// from inside the body.
pub fn op_run(right: &[String], interp: &mut InterpreterState) -> Result<Value, InterpError> {
    let value = eval::evaluate(right, interp)?;
    let func = match value {
        Value::Function(func) => func,
        other => {
            return Err(InterpError::type_error(format!(
                "'Run' requires a function, got {}",
                other.type_name()
            )))
        }
    };

    let (params, values, body) = {
        let data = func.borrow();
        (data.params.clone(), data.values.clone(), data.body.clone())
    };

    if params.len() != values.len() {
        return Err(InterpError::runtime(format!(
            "Function expects {} argument(s), got {}",
            params.len(),
            values.len()
        )));
    }

    let snapshot = interp.env.snapshot();
    for (param, arg) in params.into_iter().zip(values.into_iter()) {
        interp.env.define(param, arg);
    }
    interp.return_value = None;
    interp.call_depth += 1;

    let mut outcome: Result<(), InterpError> = Ok(());
    for statement in &body {
        // A body statement whose first token is the conditional keyword gets
        // the same dispatch the top-level line reader gives it — otherwise
        // an `If ... equals ..., return x.` inside a function body would hit
        // the statement evaluator directly and never find the relation.
        let result = if statement.first().map(|t| t.as_str()) == Some(token::CONDITIONAL_KEYWORD)
        {
            conditional::evaluate_conditional(statement, interp)
        } else {
            eval::evaluate(statement, interp)
        };
        match result {
            Ok(_) => {
                if interp.return_value.is_some() {
                    break;
                }
            }
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    interp.env.restore(snapshot);
    interp.call_depth -= 1;
    outcome?;

    let result = interp.return_value.take().unwrap_or(Value::List(Vec::new()));
    func.borrow_mut().values = Vec::new();
    Ok(result)
}
