// ABOUTME: Statement evaluator — finds the governing operator in a line of
// ABOUTME: tokens and dispatches to the matching handler

use crate::error::InterpError;
use crate::interpreter::InterpreterState;
use crate::literal;
use crate::operators::{arithmetic, assignment, display, function, index, list};
use crate::token::{self, OPERATORS};
use crate::value::Value;

/// Evaluate one statement's tokens (already split on spaces, period
/// stripped, no leading empty marker).
///
/// The governing operator is the one with the lowest precedence that
/// appears anywhere in the tokens, scanning `OPERATORS` in its fixed order
/// and keeping the first operator to reach a new lowest precedence. Because
/// several operators share a precedence tier (`+ - * / %`), a strict
/// less-than comparison means ties are broken by `OPERATORS`'s iteration
/// order rather than by where the operator sits in the line — this mirrors
/// the original evaluator's operator-table scan exactly and is required for
/// statements that contain more than one tier-5 operator.
///
/// When `,` governs, there is no binary split: `list::construct` scans the
/// whole token window in one left-to-right pass, since every list item
/// (including the last) carries its own trailing comma and a binary split
/// at just the first one would leave nothing to evaluate past the end.
pub fn evaluate(tokens: &[String], interp: &mut InterpreterState) -> Result<Value, InterpError> {
    let tokens = token::strip_filler(tokens);

    if tokens.is_empty() || (tokens.len() == 1 && tokens[0].is_empty()) {
        return Err(InterpError::syntax("Empty statement"));
    }

    if tokens[0] == "return" {
        if !interp.in_function() {
            return Err(InterpError::runtime("'return' used outside a function"));
        }
        let rest = &tokens[1..];
        let value = if rest.is_empty() {
            Value::List(Vec::new())
        } else {
            evaluate(rest, interp)?
        };
        interp.return_value = Some(value.clone());
        return Ok(value);
    }

    match find_operator(&tokens) {
        Some(Found::Comma) => list::construct(&tokens, interp),
        Some(Found::Token(idx, op)) => {
            let left = &tokens[..idx];
            let right = &tokens[idx + 1..];
            dispatch(op, left, right, interp)
        }
        None => {
            if tokens.len() == 1 {
                Ok(literal::resolve_token(&tokens[0], &interp.env))
            } else {
                Err(InterpError::syntax(format!(
                    "No operator found in statement: {}",
                    tokens.join(" ")
                )))
            }
        }
    }
}

enum Found<'a> {
    Token(usize, &'a str),
    Comma,
}

fn find_operator(tokens: &[String]) -> Option<Found<'_>> {
    // `with` always governs over a bare `,` within its own window: a
    // multi-parameter definition (`with n, m,.`) or a multi-argument call
    // (`with 1, 2,.`) needs its comma-joined tail built as one List operand
    // rather than having the comma (precedence 3) outrank `with`
    // (precedence 8) and split the statement in two. Scoping this to
    // windows that still contain a `with` token is what keeps ordinary list
    // literals (`xs is 1, 2, 3,.`) splitting at the comma as usual.
    let with_present = tokens.iter().any(|t| t == "with");

    let mut best: Option<(usize, &str, u8)> = None;

    for (op, prec) in OPERATORS.iter() {
        if *op == "," && with_present {
            continue;
        }
        let found = if *op == "," {
            tokens.iter().position(|t| token::ends_with_comma(t))
        } else {
            tokens.iter().position(|t| t == op)
        };

        if let Some(idx) = found {
            let better = match best {
                None => true,
                Some((_, _, best_prec)) => *prec < best_prec,
            };
            if better {
                best = Some((idx, op, *prec));
            }
        }
    }

    best.map(|(idx, op, _)| {
        if op == "," {
            Found::Comma
        } else {
            Found::Token(idx, op)
        }
    })
}

fn dispatch(
    op: &str,
    left: &[String],
    right: &[String],
    interp: &mut InterpreterState,
) -> Result<Value, InterpError> {
    match op {
        "is" => assignment::op_is(left, right, interp),
        "Display" => display::op_display(right, interp),
        "+" | "-" | "*" | "/" | "%" | "^" => arithmetic::op_arithmetic(op, left, right, interp),
        "at" => index::op_at(left, right, interp),
        "Run" => function::op_run(right, interp),
        "with" => function::op_with(left, right, interp),
        _ => Err(InterpError::syntax(format!("Unknown operator '{}'", op))),
    }
}
