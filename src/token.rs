// ABOUTME: Line splitting and token-level helpers shared by the evaluator and dispatcher

use nom::branch::alt;
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, opt, recognize};
use nom::{IResult, Parser};

/// Filler words the evaluator drops before looking for an operator.
pub const FILLER: [&str; 2] = ["a", "an"];

/// Statement-level operators, in the exact order the original interpreter's
/// operator table iterates them. Ties in precedence are broken by this
/// order (see `crate::eval`), not by left-to-right position in the line, so
/// the order here is load-bearing, not cosmetic.
pub const OPERATORS: [(&str, u8); 12] = [
    ("is", 1),
    ("Display", 2),
    ("+", 4),
    ("-", 5),
    ("*", 5),
    ("/", 5),
    ("%", 5),
    ("^", 6),
    ("at", 9),
    (",", 3),
    ("Run", 7),
    ("with", 8),
];

/// `return` is checked separately from `OPERATORS` in `crate::eval` because,
/// uniquely among the operators, it is unary-prefix rather than infix — but
/// it shares the same precedence table and is listed here for completeness.
pub const RETURN_PRECEDENCE: u8 = 0;

pub const CONDITIONAL_KEYWORD: &str = "If";
pub const RELATION_KEYWORD: &str = "equals";

/// Strip the trailing period required of every non-blank, non-comment line
/// and split the remainder on single spaces. A leading space therefore
/// yields an empty first token — the block-indent marker the dispatcher
/// looks for.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, String> {
    if !line.ends_with('.') {
        return Err("Each line must end with a '.'".to_string());
    }
    let body = &line[..line.len() - 1];
    Ok(body.split(' ').map(|s| s.to_string()).collect())
}

/// Drop filler words (`a`, `an`) from a token sequence.
pub fn strip_filler(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !FILLER.contains(&t.as_str()))
        .cloned()
        .collect()
}

/// A token "carries" a trailing comma when its last character is `,` —
/// the marker the list-construction branch of the evaluator scans for.
pub fn ends_with_comma(token: &str) -> bool {
    token.ends_with(',')
}

/// Strip exactly one trailing comma from a token, if present.
pub fn strip_trailing_comma(token: &str) -> &str {
    token.strip_suffix(',').unwrap_or(token)
}

/// Recognize the number grammar a bare token may use: optional leading `-`,
/// then digits with an optional fractional part, or a leading `.` with
/// digits. Mirrors the shape of a standalone float literal; returns the
/// parsed value only when the *entire* token matches (no trailing garbage).
pub fn parse_number_token(token: &str) -> Option<f64> {
    fn number(input: &str) -> IResult<&str, &str> {
        recognize((
            opt(char('-')),
            alt((
                recognize((digit1, opt((char('.'), opt(digit1))))),
                recognize((char('.'), digit1)),
            )),
        ))
        .parse(input)
    }

    let parsed: IResult<&str, &str> = all_consuming(number).parse(token);
    match parsed {
        Ok((_, matched)) => matched.parse::<f64>().ok(),
        Err(_) => None,
    }
}

/// Recognizes the literal boolean keywords without pulling in a full parser.
pub fn parse_bool_token(token: &str) -> Option<bool> {
    match token {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}
