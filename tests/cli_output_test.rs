// ABOUTME: End-to-end CLI tests asserting literal stdout bytes against spec scenarios

use std::io::Write;
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `source` to a temp `.nl` file, run the built `nl` binary against
/// it, and return stdout as a string. Asserts the run exits cleanly.
fn run_nl_source(source: &str) -> String {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "nl_cli_test_{}_{}.nl",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));

    let mut file = std::fs::File::create(&path).expect("failed to create temp source file");
    file.write_all(source.as_bytes())
        .expect("failed to write temp source file");
    drop(file);

    let output = Command::new(env!("CARGO_BIN_EXE_nl"))
        .arg(&path)
        .output()
        .expect("failed to run the nl binary");

    std::fs::remove_file(&path).ok();

    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("stdout was not valid UTF-8")
}

#[test]
fn test_scenario_1_assignment_and_print() {
    let stdout = run_nl_source("x is 5.\nDisplay x.\n");
    assert_eq!(stdout, "5.0 \n");
}

#[test]
fn test_scenario_2_arithmetic_broadcasting() {
    let stdout = run_nl_source("xs is 1, 2, 3,.\nDisplay xs + 10.\n");
    assert_eq!(stdout, "[11.0, 12.0, 13.0] \n");
}

#[test]
fn test_scenario_3_indexing() {
    let stdout = run_nl_source("xs is 10, 20, 30,.\nDisplay xs at 2.\n");
    assert_eq!(stdout, "20.0 \n");
}
