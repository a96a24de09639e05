//! End-to-end tests for the `fib` binary
//!
//! Each test runs the compiled binary and checks stdout, stderr and the
//! exit status.

use std::fs;
use std::process::{Command, Output};

fn fib_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fib"));
    // Keep the environment from leaking config or log settings into the run
    cmd.env_remove("FIB_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    fib_cmd().args(args).output().expect("failed to run fib")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_args_prints_fib_40() {
    let output = run(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "102334155\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_explicit_index() {
    let output = run(&["10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "55\n");

    let output = run(&["0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn test_negative_index_fails() {
    let output = run(&["-5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("Error: invalid argument"), "stderr: {}", err);
    assert!(err.contains("negative"));
}

#[test]
fn test_non_integer_index_fails() {
    let output = run(&["twelve"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid argument"));
}

#[test]
fn test_overflow_index_fails() {
    let output = run(&["94"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("overflows"));
}

#[test]
fn test_iterative_reaches_limit() {
    let output = run(&["93", "--algorithm", "iterative"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "12200160415121876738\n");
}

#[test]
fn test_json_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    let spec = format!("json:{}", path.display());

    let output = run(&["15", "--report", &spec]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "610\n");

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report["n"], 15);
    assert_eq!(report["value"], 610);
    assert_eq!(report["algorithm"], "naive");
    assert_eq!(report["calls"], 1973);
}

#[test]
fn test_human_report_goes_to_stderr() {
    let output = run(&["12", "--report", "human"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "144\n");
    assert!(stderr(&output).contains("value:      144"));
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.toml");
    fs::write(&path, "n = 20\nalgorithm = \"iterative\"\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "6765\n");

    // Positional index wins over the file
    let output = run(&["--config", path.to_str().unwrap(), "7"]);
    assert_eq!(stdout(&output), "13\n");
}

#[test]
fn test_config_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.toml");
    fs::write(&path, "n = 8\n").unwrap();

    let output = fib_cmd()
        .env("FIB_CONFIG", &path)
        .output()
        .expect("failed to run fib");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "21\n");
}

#[test]
fn test_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.toml");
    fs::write(&path, "n = -2\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config key 'n'"));

    let output = run(&["--config", dir.path().join("missing.toml").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read config"));
}

#[test]
fn test_bench_output() {
    let output = run(&["bench", "--max-naive", "20"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.lines().all(|l| l.starts_with("BENCH:fibonacci:")));
    assert!(out.contains("BENCH:fibonacci:fib-naive-20:6765:"));
    assert!(out.contains("BENCH:fibonacci:fib-iterative-93:12200160415121876738:"));
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let output = fib_cmd()
        .env("RUST_LOG", "fib=debug")
        .arg("10")
        .output()
        .expect("failed to run fib");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "55\n");
    assert!(stderr(&output).contains("evaluation finished"));
}
