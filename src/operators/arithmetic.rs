// ABOUTME: The arithmetic operators (+ - * / % ^), broadcast over lists

use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::value::Value;

pub fn op_arithmetic(
    op: &str,
    left: &[String],
    right: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    let left_value = eval::evaluate(left, interp)?;
    let right_value = eval::evaluate(right, interp)?;
    apply(op, &left_value, &right_value)
}

/// Applies `op` element-wise whenever either side is a `List`. A list paired
/// with a list of the same length zips; a list paired with a scalar
/// broadcasts the scalar across every element. Because each recursive call
/// returns exactly one `Value`, a list of lists broadcasts again naturally —
/// there is no separate case needed for nested lists.
fn apply(op: &str, left: &Value, right: &Value) -> Result<Value, InterpError> {
    match (left, right) {
        (Value::List(xs), Value::List(ys)) if xs.len() == ys.len() => xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| apply(op, x, y))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (Value::List(xs), Value::List(ys)) => Err(InterpError::runtime(format!(
            "Cannot apply '{}' to lists of different lengths ({} and {})",
            op,
            xs.len(),
            ys.len()
        ))),
        (Value::List(xs), other) => xs
            .iter()
            .map(|x| apply(op, x, other))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (other, Value::List(ys)) => ys
            .iter()
            .map(|y| apply(op, other, y))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        (Value::Number(a), Value::Number(b)) => arithmetic(op, *a, *b),
        _ => Err(InterpError::type_error(format!(
            "Cannot apply '{}' to {} and {}",
            op,
            left.type_name(),
            right.type_name()
        ))),
    }
}

fn arithmetic(op: &str, a: f64, b: f64) -> Result<Value, InterpError> {
    let result = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => {
            if b == 0.0 {
                return Err(InterpError::runtime("Division by zero"));
            }
            a / b
        }
        "%" => {
            // Modulo truncates both operands to integers before computing,
            // unlike the other arithmetic operators which stay float-native.
            let (a_int, b_int) = (a.trunc(), b.trunc());
            if b_int == 0.0 {
                return Err(InterpError::runtime("Division by zero"));
            }
            a_int % b_int
        }
        "^" => a.powf(b),
        _ => unreachable!("op_arithmetic only dispatches known arithmetic operators"),
    };
    Ok(Value::Number(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_addition() {
        let mut interp = InterpreterState::new();
        let value = op_arithmetic("+", &["2".to_string()], &["3".to_string()], &mut interp)
            .unwrap();
        assert_eq!(value, Value::Number(5.0));
    }

    #[test]
    fn test_broadcast_over_list() {
        let result = apply(
            "+",
            &Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
            &Value::Number(10.0),
        )
        .unwrap();
        assert_eq!(
            result,
            Value::List(vec![Value::Number(11.0), Value::Number(12.0)])
        );
    }

    #[test]
    fn test_broadcast_over_list_of_lists() {
        let nested = Value::List(vec![
            Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
            Value::Number(3.0),
        ]);
        let result = apply("+", &nested, &Value::Number(10.0)).unwrap();
        assert_eq!(
            result,
            Value::List(vec![
                Value::List(vec![Value::Number(11.0), Value::Number(12.0)]),
                Value::Number(13.0)
            ])
        );
    }

    #[test]
    fn test_modulo_truncates_both_operands_to_integer() {
        let result = apply("%", &Value::Number(7.9), &Value::Number(2.9)).unwrap();
        // trunc(7.9) % trunc(2.9) = 7 % 2 = 1
        assert_eq!(result, Value::Number(1.0));
    }

    #[test]
    fn test_division_by_zero_is_runtime_error() {
        let result = apply("/", &Value::Number(1.0), &Value::Number(0.0));
        assert!(matches!(result, Err(InterpError::Runtime(_))));
    }

    #[test]
    fn test_arithmetic_on_non_numbers_is_type_error() {
        let result = apply("+", &Value::Word("x".to_string()), &Value::Number(1.0));
        assert!(matches!(result, Err(InterpError::Type(_))));
    }
}
