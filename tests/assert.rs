//! The failing assertion path exits the process, so it runs in a re-executed
//! copy of this test binary.

use std::env;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const CHILD_ENV: &str = "CLOG_ASSERT_CHILD";
const FILE_ENV: &str = "CLOG_ASSERT_FILE";

fn run_child(test_name: &str) -> std::process::Output {
    Command::new(env::current_exe().unwrap())
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("failed to re-run test binary")
}

#[test]
fn failed_assertion_logs_and_exits() {
    if env::var_os(CHILD_ENV).is_some() {
        let mut logger = clog::Logger::builder().colors(false).build();
        logger.assert_or_abort(false, "2+2==5", "file.c:12");
        unreachable!("assert_or_abort returned");
    }

    let output = run_child("failed_assertion_logs_and_exits");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.starts_with("[ERROR]"))
        .expect("no error line");
    assert!(line.contains("2+2==5"));
    assert!(line.contains("file.c:12"));
    assert_eq!(stderr.matches("[ERROR]").count(), 1);
}

#[test]
fn macro_assertion_reports_expression_and_location() {
    if env::var_os(CHILD_ENV).is_some() {
        clog::global::set_colors(false);
        clog::clog_assert!(2 + 2 == 4);
        clog::clog_assert!(2 + 2 == 5);
        unreachable!("clog_assert returned");
    }

    let output = run_child("macro_assertion_reports_expression_and_location");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 + 2 == 5"));
    assert!(!stderr.contains("2 + 2 == 4"));
    assert!(stderr.contains("tests/assert.rs:"));
}

#[test]
fn failed_assertion_keeps_earlier_file_lines() {
    if let Some(path) = env::var_os(FILE_ENV) {
        let mut logger = clog::Logger::builder().colors(false).file(path).build();
        logger.info(format_args!("before"));
        logger.assert_or_abort(false, "ready", "main.rs:3");
        unreachable!("assert_or_abort returned");
    }

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("assert.log");
    let output = Command::new(env::current_exe().unwrap())
        .args(["failed_assertion_keeps_earlier_file_lines", "--exact", "--nocapture"])
        .env(FILE_ENV, &path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("before"));
    assert!(content.contains("Assertion failed: ready at main.rs:3"));
}
