use infix::runner::{run, run_file, RunSummary};
use infix::{repl, Evaluator, ErrorKind};
use std::fs;
use std::io::Cursor;

fn run_to_string(source: &str) -> (RunSummary, String) {
    let mut out = Vec::new();
    let summary = run(source, Some("test.txt"), &mut out).expect("writing to a Vec cannot fail");
    (summary, String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn prints_one_result_per_line() {
    let (summary, output) = run_to_string("1 - 2 - 3\n2 + 3 * 4\n3.5 * 2\n");

    assert_eq!(summary, RunSummary { evaluated: 3, failed: 0 });
    assert_eq!(output, "-4.0\n14.0\n7.0\n");
}

#[test]
fn skips_blank_lines() {
    let (summary, output) = run_to_string("\n   \n-1\n\n");

    assert_eq!(summary, RunSummary { evaluated: 1, failed: 0 });
    assert_eq!(output, "-1.0\n");
}

#[test]
fn failing_line_does_not_stop_the_run() {
    let (summary, output) = run_to_string("5 5\n10 / 4\n5 +\n");

    assert_eq!(summary, RunSummary { evaluated: 1, failed: 2 });
    assert!(output.contains("2.5"));
    assert!(output.contains("Expected an operator, received the number '5'"));
    assert!(output.contains("Operator '+' is missing a number"));

    let result_at = output.find("2.5").unwrap();
    let missing_at = output.find("missing a number").unwrap();
    assert!(result_at < missing_at, "results keep file order");
}

#[test]
fn division_by_zero_is_printed_not_reported() {
    let (summary, output) = run_to_string("5 / 0\n0 / 0\n");

    assert_eq!(summary, RunSummary { evaluated: 2, failed: 0 });
    assert_eq!(output, "inf\nNaN\n");
}

#[test]
fn run_file_creates_missing_file() {
    let dir = std::env::temp_dir().join(format!("infix-runner-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("missing.txt");
    let _ = fs::remove_file(&path);

    let mut out = Vec::new();
    let summary = run_file(&path, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(path.exists());
    assert_eq!(summary, RunSummary::default());
    assert!(output.contains("was found."));
    assert!(output.contains("Creating file..."));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn run_file_reads_existing_file() {
    let dir = std::env::temp_dir().join(format!("infix-runner-existing-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("infix.txt");
    fs::write(&path, "2 * 3 + 4\n-10 + 5\n").unwrap();

    let mut out = Vec::new();
    let summary = run_file(&path, &mut out).unwrap();

    assert_eq!(summary, RunSummary { evaluated: 2, failed: 0 });
    assert_eq!(String::from_utf8(out).unwrap(), "10.0\n-5.0\n");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn reused_evaluator_does_not_leak_state() {
    let mut evaluator = Evaluator::new();

    // Fails halfway through with values still on the stacks
    let first = evaluator.evaluate("1 + 2 * 3 3");
    assert_eq!(first.unwrap_err().kind, ErrorKind::ConsecutiveOperands);

    assert_eq!(evaluator.evaluate("7").unwrap(), 7.0);
    assert_eq!(evaluator.evaluate("2 + 3 * 4").unwrap(), 14.0);
    assert_eq!(evaluator.evaluate("2 + 3 * 4").unwrap(), 14.0);
}

#[test]
fn repl_session_evaluates_until_exit() {
    let input = Cursor::new("2 * 3 + 4\n\n5 5\nexit\n1 + 1\n");
    let mut out = Vec::new();
    repl::session(input, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("10.0"));
    assert!(output.contains("Expected an operator"));
    assert!(output.ends_with("Goodbye!\n"));
    assert!(!output.contains("2.0"));
}

#[test]
fn repl_session_ends_at_eof() {
    let mut out = Vec::new();
    repl::session(Cursor::new("-1"), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> -1.0\n> \n");
}
