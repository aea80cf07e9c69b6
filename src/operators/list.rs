// ABOUTME: The "," operator — builds an ordered list from comma-joined tokens

use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::token;
use crate::value::Value;

/// `1, 2, 3,.` is not a binary operator in the usual sense — every item,
/// including the last, carries its own trailing comma. Scan left to right,
/// accumulating tokens into a buffer; whenever a token ends with `,`, strip
/// it, evaluate the buffer accumulated so far as one statement, push the
/// result, and start a fresh buffer. A buffer left over at the end (no
/// trailing comma on the very last item) is flushed the same way.
///
/// A binary left/right split at just the first comma would leave nothing to
/// evaluate once the last item's trailing comma is reached — this single
/// left-to-right pass is what lets every item, including the last, end in a
/// comma.
pub fn construct(tokens: &[String], interp: &mut InterpreterState) -> Result<Value, InterpError> {
    let mut items = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for raw in tokens {
        if token::ends_with_comma(raw) {
            buffer.push(token::strip_trailing_comma(raw).to_string());
            items.push(eval::evaluate(&buffer, interp)?);
            buffer.clear();
        } else {
            buffer.push(raw.clone());
        }
    }

    if !buffer.is_empty() {
        items.push(eval::evaluate(&buffer, interp)?);
    }

    Ok(Value::List(items))
}
