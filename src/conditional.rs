// ABOUTME: The "If X equals Y, stmt." one-armed conditional evaluator

use crate::error::InterpError;
use crate::eval;
use crate::interpreter::InterpreterState;
use crate::literal;
use crate::token;
use crate::value::Value;

/// Evaluate a conditional line. `tokens[0]` is the `If` keyword; the first
/// token carrying a trailing comma marks the end of the condition and the
/// start of the guarded statement. Inside the condition, `equals` splits the
/// two operands to compare.
///
/// Returns `Ok(None)` when the condition is false (nothing ran), matching
/// the one-armed conditional's "no else" design — there is nothing to
/// report back for a guard that didn't fire.
pub fn evaluate_conditional(
    tokens: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    if tokens.first().map(|t| t.as_str()) != Some(token::CONDITIONAL_KEYWORD) {
        return Err(InterpError::syntax("Conditional must start with 'If'"));
    }

    let body = &tokens[1..];
    let comma_count = body.iter().filter(|t| token::ends_with_comma(t)).count();
    if comma_count > 1 {
        return Err(InterpError::syntax(
            "Conditional may have only one comma, marking the statement boundary",
        ));
    }
    let comma_idx = body
        .iter()
        .position(|t| token::ends_with_comma(t))
        .ok_or_else(|| InterpError::syntax("Conditional is missing the comma before its statement"))?;

    let mut condition: Vec<String> = body[..=comma_idx].to_vec();
    let last = condition.len() - 1;
    condition[last] = token::strip_trailing_comma(&condition[last]).to_string();
    let statement = &body[comma_idx + 1..];

    // Both the condition and the guarded statement must be non-empty,
    // unconditionally — not just when the condition turns out to be true.
    if condition.is_empty() || condition.iter().all(|t| t.is_empty()) {
        return Err(InterpError::syntax("Conditional's condition is empty"));
    }
    if statement.is_empty() {
        return Err(InterpError::syntax("Conditional's guarded statement is empty"));
    }

    let eq_idx = condition
        .iter()
        .position(|t| t == token::RELATION_KEYWORD)
        .ok_or_else(|| InterpError::syntax("Conditional is missing 'equals'"))?;

    let left_tokens = &condition[..eq_idx];
    let right_tokens = &condition[eq_idx + 1..];

    let left = literal::resolve_again(&eval::evaluate(left_tokens, interp)?, &interp.env);
    let right = literal::resolve_again(&eval::evaluate(right_tokens, interp)?, &interp.env);

    if left == right {
        eval::evaluate(statement, interp)
    } else {
        Ok(Value::Bool(false))
    }
}
