//! Tests for the default line-per-literal output.

use crate::{assert_known_literal, run_dates, BIN};
use chrono::Local;
use literal_generator::SAMPLE_LITERALS;
use std::io::Read;
use std::process::{Command, Stdio};
use string_literals::testing::cli::{assert_cli_success, execute_string_literals, stdout_lines};

#[test]
fn test_default_run_prints_1000_literals() -> Result<(), Box<dyn std::error::Error>> {
    let before = Local::now().date_naive();
    let output = execute_string_literals(BIN, &[], &[])?;
    assert_cli_success(&output, "default run");

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1000);

    let dates = run_dates(before);
    for line in &lines {
        assert_known_literal(line, &dates);
    }

    Ok(())
}

#[test]
fn test_zero_count_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let output = execute_string_literals(BIN, &["--count", "0"], &[])?;
    assert_cli_success(&output, "zero count");

    assert!(output.stdout.is_empty());
    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_seeded_runs_are_reproducible() -> Result<(), Box<dyn std::error::Error>> {
    let args = ["--count", "5", "--seed", "42"];

    let first = execute_string_literals(BIN, &args, &[])?;
    assert_cli_success(&first, "seeded run 1");
    let second = execute_string_literals(BIN, &args, &[])?;
    assert_cli_success(&second, "seeded run 2");

    assert_eq!(stdout_lines(&first).len(), 5);
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_unseeded_runs_differ() -> Result<(), Box<dyn std::error::Error>> {
    let first = execute_string_literals(BIN, &["--count", "50"], &[])?;
    let second = execute_string_literals(BIN, &["--count", "50"], &[])?;
    assert_cli_success(&first, "unseeded run 1");
    assert_cli_success(&second, "unseeded run 2");

    assert_ne!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_count_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let output = execute_string_literals(BIN, &[], &[("STRING_LITERALS_COUNT", "7")])?;
    assert_cli_success(&output, "count from env");

    assert_eq!(stdout_lines(&output).len(), 7);

    Ok(())
}

#[test]
fn test_unicode_sample_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let output = execute_string_literals(BIN, &["--count", "5000", "--seed", "11"], &[])?;
    assert_cli_success(&output, "unicode run");

    let emoji = "😀 😎 👍";
    let lines = stdout_lines(&output);
    assert!(lines.iter().any(|line| line.as_bytes() == emoji.as_bytes()));

    // Any line that is not one of the ASCII-only categories must be an exact sample
    for line in lines.iter().filter(|line| !line.is_ascii()) {
        assert!(SAMPLE_LITERALS.contains(&line.as_str()), "{line:?}");
    }

    Ok(())
}

#[test]
fn test_logs_do_not_reach_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let before = Local::now().date_naive();
    let output = execute_string_literals(
        BIN,
        &["--count", "20", "--seed", "3"],
        &[("RUST_LOG", "debug")],
    )?;
    assert_cli_success(&output, "debug logging run");

    let dates = run_dates(before);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 20);
    for line in &lines {
        assert_known_literal(line, &dates);
    }
    assert!(String::from_utf8_lossy(&output.stderr).contains("Emitted 20 literals"));

    Ok(())
}

#[test]
fn test_closed_stdout_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(BIN)
        .args(["--count", "1000000"])
        .env_remove("STRING_LITERALS_OUTPUT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Close the read end so every write hits a broken pipe
    drop(child.stdout.take());

    let mut stderr = String::new();
    if let Some(mut err) = child.stderr.take() {
        err.read_to_string(&mut stderr)?;
    }
    let status = child.wait()?;

    assert_eq!(status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains("Error:"));

    Ok(())
}
