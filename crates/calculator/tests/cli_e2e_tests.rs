//! End-to-end tests for the `calculator-tests` binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn calculator_tests_cmd() -> Command {
    let mut cmd = Command::cargo_bin("calculator-tests").unwrap();
    cmd.env_remove("MINITEST_OUTPUT")
        .env_remove("MINITEST_COLOR")
        .env_remove("MINITEST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_run_reports_intentional_failure() {
    calculator_tests_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[==========] Running 6 tests from 2 test suites.",
        ))
        .stdout(predicate::str::contains("[ RUN      ] Calculator.AddsNumbers"))
        .stdout(predicate::str::contains("[  FAILED  ] Calculator.SubtractsNumbers ("))
        .stdout(predicate::str::contains("Expected equality of these values:"))
        .stdout(predicate::str::contains("  subtract(5, 3)\n    Which is: 2"))
        .stdout(predicate::str::contains("[  PASSED  ] 5 tests."))
        .stdout(predicate::str::contains("[  FAILED  ] 1 tests, listed below:"))
        .stdout(predicate::str::contains("[  FAILED  ] Calculator.SubtractsNumbers\n"));
}

#[test]
fn test_failure_location_points_at_test_source() {
    calculator_tests_cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::is_match(r"calculator_tests\.rs:\d+: Expected equality").unwrap());
}

#[test]
fn test_xml_report_written_to_nested_directory() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("build").join("tests").join("report.xml");

    calculator_tests_cmd()
        .arg(format!("--report_output=xml:{}", report.display()))
        .assert()
        .code(1);

    let xml = fs::read_to_string(&report).unwrap();
    assert!(xml.contains("<testsuites tests=\"6\" failures=\"1\" disabled=\"0\" errors=\"0\">"));
    assert!(xml.contains("<testsuite name=\"Calculator\" tests=\"3\" failures=\"1\""));
    assert!(xml.contains("<testsuite name=\"MinHeap\" tests=\"3\" failures=\"0\""));
    assert!(xml.contains("<testcase name=\"SubtractsNumbers\" status=\"run\" result=\"failed\""));
    // Suites are listed alphabetically
    assert!(xml.find("name=\"Calculator\"").unwrap() < xml.find("name=\"MinHeap\"").unwrap());
}

#[test]
fn test_json_report_from_environment() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.json");

    calculator_tests_cmd()
        .env("MINITEST_OUTPUT", format!("json:{}", report.display()))
        .assert()
        .code(1);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["tests"], 6);
    assert_eq!(value["failures"], 1);
    assert_eq!(value["testsuites"][0]["name"], "Calculator");
}

#[test]
fn test_unwritable_report_does_not_change_exit_code() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let report = blocker.join("report.xml");

    calculator_tests_cmd()
        .arg(format!("--report_output=xml:{}", report.display()))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[  PASSED  ] 5 tests."))
        .stderr(predicate::str::contains("Warning: failed to write XML report to"))
        .stderr(predicate::function(|err: &str| {
            err.matches("failed to create report directory").count() == 1
        }));
}

#[test]
fn test_unknown_report_format_warns_once() {
    calculator_tests_cmd()
        .arg("--report_output=html:report.html")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[  PASSED  ] 5 tests."))
        .stderr(predicate::str::contains("Warning: unknown report format 'html'"))
        .stderr(predicate::function(|err: &str| {
            err.matches("unknown report format").count() == 1
        }));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    calculator_tests_cmd()
        .arg(OsStr::from_bytes(b"--label=\xff\xfe"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[  PASSED  ] 5 tests."))
        .stdout(predicate::str::contains("[  FAILED  ] 1 tests, listed below:"));
}

#[test]
fn test_unknown_arguments_are_ignored() {
    calculator_tests_cmd()
        .arg("--verbose")
        .arg("positional")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[  PASSED  ] 5 tests."));
}
