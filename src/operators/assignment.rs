// ABOUTME: The "is" operator — binds a name to the value of the right-hand statement

use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::value::Value;

/// `is` is asymmetric: the left side is a raw name, never itself evaluated
/// (`x is x` does not require `x` to already be bound), while the right side
/// is evaluated as a full statement.
pub fn op_is(
    left: &[String],
    right: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    let name = match left {
        [name] if !name.is_empty() => name.clone(),
        _ => {
            return Err(InterpError::syntax(
                "Left side of 'is' must be a single name",
            ))
        }
    };

    let value = eval::evaluate(right, interp)?;

    if let Value::Function(func) = &value {
        func.borrow_mut().name = Some(name.clone());
    }

    interp.env.define(name, value.clone());
    Ok(value)
}
