// ABOUTME: End-to-end tests driving the line dispatcher over small programs

use naturallanguage::error::InterpError;
use naturallanguage::interpreter::InterpreterState;
use naturallanguage::value::Value;

/// Feed every line through the dispatcher in order, panicking on the first
/// error — the happy-path scenarios below have none.
fn run_lines(lines: &[&str]) -> InterpreterState {
    let mut interp = InterpreterState::new();
    for line in lines {
        interp
            .process_line(line)
            .unwrap_or_else(|e| panic!("line {:?} failed: {}", line, e));
    }
    interp
}

#[test]
fn test_assignment_and_arithmetic() {
    let interp = run_lines(&["x is 2 + 3.", "y is x * 4."]);
    assert_eq!(interp.env.get("x"), Some(&Value::Number(5.0)));
    assert_eq!(interp.env.get("y"), Some(&Value::Number(20.0)));
}

#[test]
fn test_list_construction_and_indexing() {
    let interp = run_lines(&["xs is 1, 2, 3,.", "first is xs at 1."]);
    assert_eq!(
        interp.env.get("xs"),
        Some(&Value::List(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0)
        ]))
    );
    assert_eq!(interp.env.get("first"), Some(&Value::Number(1.0)));
}

#[test]
fn test_arithmetic_broadcasts_over_a_list() {
    let interp = run_lines(&["xs is 1, 2, 3,.", "ys is xs + 10."]);
    assert_eq!(
        interp.env.get("ys"),
        Some(&Value::List(vec![
            Value::Number(11.0),
            Value::Number(12.0),
            Value::Number(13.0)
        ]))
    );
}

#[test]
fn test_single_param_function_definition_and_call() {
    let interp = run_lines(&[
        "square is a function with n.",
        " return n * n.",
        "result is Run square with 5.",
    ]);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(25.0)));
}

#[test]
fn test_multi_param_function_definition_and_call() {
    let interp = run_lines(&[
        "add is a function with n, m,.",
        " return n + m.",
        "result is Run add with 2, 3,.",
    ]);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(5.0)));
}

#[test]
fn test_function_body_can_span_several_statements() {
    let interp = run_lines(&[
        "average is a function with a, b,.",
        " total is a + b.",
        " return total / 2.",
        "result is Run average with 4, 10,.",
    ]);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(7.0)));
}

#[test]
fn test_function_invocation_does_not_leak_parameter_bindings() {
    // `outer` is left unrelated to the parameter name so that defining
    // `identity`'s `with n` clause resolves `n` as a bare, unbound word
    // rather than picking up a same-named outer binding.
    let interp = run_lines(&[
        "outer is 99.",
        "identity is a function with n.",
        " return n.",
        "result is Run identity with 1.",
    ]);
    assert_eq!(interp.env.get("outer"), Some(&Value::Number(99.0)));
    assert_eq!(interp.env.get("n"), None);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(1.0)));
}

#[test]
fn test_conditional_runs_guarded_statement_only_when_equal() {
    let mut interp = InterpreterState::new();
    interp.process_line("x is 5.").unwrap();
    interp.process_line("If x equals 5, y is 1.").unwrap();
    interp.process_line("If x equals 6, z is 1.").unwrap();
    assert_eq!(interp.env.get("y"), Some(&Value::Number(1.0)));
    assert!(interp.env.get("z").is_none());
}

#[test]
fn test_multiple_function_definitions_compose() {
    let interp = run_lines(&[
        "square is a function with n.",
        " return n * n.",
        "sum_of_squares is a function with a, b,.",
        " x is Run square with a.",
        " y is Run square with b.",
        " return x + y.",
        "result is Run sum_of_squares with 3, 4,.",
    ]);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(25.0)));
}

#[test]
fn test_return_stops_body_execution_early() {
    let interp = run_lines(&[
        "early is a function with n.",
        " return n.",
        " unreached is 999.",
        "result is Run early with 3.",
    ]);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(3.0)));
    assert!(interp.env.get("unreached").is_none());
}

#[test]
fn test_error_conditions() {
    let mut interp = InterpreterState::new();

    let missing_period = interp.process_line("x is 5");
    assert!(matches!(missing_period, Err(InterpError::Syntax(_))));

    interp.process_line("xs is 1, 2,.").unwrap();
    let out_of_range = interp.process_line("y is xs at 9.");
    assert!(matches!(out_of_range, Err(InterpError::Runtime(_))));

    interp.process_line("name is hello.").unwrap();
    let type_error = interp.process_line("z is name + 1.");
    assert!(matches!(type_error, Err(InterpError::Type(_))));

    let add = std::rc::Rc::new(std::cell::RefCell::new(
        naturallanguage::value::FunctionData::new(vec!["n".to_string(), "m".to_string()]),
    ));
    interp
        .env
        .define("add".to_string(), Value::Function(add));
    let wrong_arity = interp.process_line("result is Run add with 1.");
    assert!(matches!(wrong_arity, Err(InterpError::Runtime(_))));
}

#[test]
fn test_conditional_inside_function_body() {
    let interp = run_lines(&[
        "classify is a function with n.",
        " If n equals 0, return 1.",
        " return 0.",
        "result is Run classify with 0.",
        "other is Run classify with 5.",
    ]);
    assert_eq!(interp.env.get("result"), Some(&Value::Number(1.0)));
    assert_eq!(interp.env.get("other"), Some(&Value::Number(0.0)));
}

#[test]
fn test_per_line_error_does_not_abort_a_file_run() {
    naturallanguage::driver::run_source("x is 5\nDisplay x.\ny is 1.\n");
}
