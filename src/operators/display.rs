// ABOUTME: The "Display" operator — prints a value to stdout

use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::value::Value;

/// `Display` is prefix-only: everything after the keyword is the expression
/// to print. Printing also yields the value, so `Display` composes the same
/// way every other operator does when nested inside a larger statement.
///
/// With nothing after the keyword (`Display.` as the whole statement),
/// there is no expression to evaluate at all — print a bare newline rather
/// than routing an empty token slice through the statement evaluator, which
/// would otherwise reject it as an empty statement.
pub fn op_display(right: &[String], interp: &mut InterpreterState) -> Result<Value, InterpError> {
    if right.is_empty() {
        println!();
        return Ok(Value::List(Vec::new()));
    }

    let value = eval::evaluate(right, interp)?;
    println!("{} ", value);
    Ok(value)
}
