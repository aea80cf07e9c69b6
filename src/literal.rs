// ABOUTME: Resolves a raw token or an already-built List into a runtime Value

use crate::env::Environment;
use crate::token::{parse_bool_token, parse_number_token};
use crate::value::Value;

/// Resolve a single token against the environment, in the order:
/// a bound variable, then a number literal, then a boolean literal, falling
/// back to a bare `Word` if none match.
///
/// A variable bound to a `Function` has its diagnostic `name` field stamped
/// with the token it was just looked up under — the same side effect the
/// original evaluator performs on every lookup, kept here since it is a
/// lookup-time effect, not a parsing one.
pub fn resolve_token(token: &str, env: &Environment) -> Value {
    if let Some(value) = env.get(token) {
        if let Value::Function(func) = value {
            func.borrow_mut().name = Some(token.to_string());
        }
        return value.clone();
    }

    if let Some(n) = parse_number_token(token) {
        return Value::Number(n);
    }

    if let Some(b) = parse_bool_token(token) {
        return Value::Bool(b);
    }

    Value::Word(token.to_string())
}

/// Re-resolve an already-evaluated operand against the environment.
///
/// Used by the conditional evaluator's `equals` handler, which performs a
/// second resolution pass over values the statement evaluator already
/// produced: if a variable was bound to a name-shaped `Word` after that word
/// was first resolved, this pass picks up the new binding. Anything other
/// than a `Word` passes through unchanged, since numbers, bools, lists, and
/// functions carry nothing left to re-resolve.
pub fn resolve_again(value: &Value, env: &Environment) -> Value {
    match value {
        Value::Word(name) => resolve_token(name, env),
        other => other.clone(),
    }
}
