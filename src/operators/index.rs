// ABOUTME: The "at" operator — 1-based list indexing

use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::value::Value;

/// `the list at 2.` returns the second element. Indexing is 1-based, so
/// index 0 and any index past the end are both out of range rather than
/// meaning anything special.
pub fn op_at(
    left: &[String],
    right: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    let list_value = eval::evaluate(left, interp)?;
    let index_value = eval::evaluate(right, interp)?;

    let items = match list_value {
        Value::List(items) => items,
        other => {
            return Err(InterpError::type_error(format!(
                "'at' requires a list, got {}",
                other.type_name()
            )))
        }
    };

    let index = match index_value {
        Value::Number(n) => n,
        other => {
            return Err(InterpError::type_error(format!(
                "'at' requires a numeric index, got {}",
                other.type_name()
            )))
        }
    };

    if index.fract() != 0.0 || index < 1.0 || index as usize > items.len() {
        return Err(InterpError::runtime(format!(
            "Index {} out of range for a list of length {}",
            index,
            items.len()
        )));
    }

    Ok(items[index as usize - 1].clone())
}
