//! JSON report, in the layout of GoogleTest's `json:` output

use crate::error::ReportError;
use crate::runner::{ExecutionRecord, RunSummary};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tests: usize,
    failures: usize,
    disabled: usize,
    errors: usize,
    time: String,
    name: &'static str,
    testsuites: Vec<JsonSuite<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonSuite<'a> {
    name: &'a str,
    tests: usize,
    failures: usize,
    disabled: usize,
    errors: usize,
    time: String,
    testsuite: Vec<JsonCase<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonCase<'a> {
    name: &'a str,
    status: &'static str,
    result: &'static str,
    time: String,
    classname: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<JsonFailure>,
}

#[derive(Debug, Serialize)]
struct JsonFailure {
    failure: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

fn seconds(secs: f64) -> String {
    format!("{:.3}s", secs)
}

/// Render the full report document
pub fn render(records: &[ExecutionRecord<'_>], summary: &RunSummary) -> Result<String, ReportError> {
    let testsuites = summary
        .suites
        .iter()
        .map(|suite| JsonSuite {
            name: &suite.name,
            tests: suite.tests,
            failures: suite.failures,
            disabled: 0,
            errors: 0,
            time: seconds(suite.time_secs),
            testsuite: records
                .iter()
                .filter(|r| r.case.suite() == suite.name)
                .map(json_case)
                .collect(),
        })
        .collect();

    let report = JsonReport {
        tests: summary.total,
        failures: summary.assertion_failures,
        disabled: 0,
        errors: 0,
        time: seconds(summary.elapsed_ms as f64 / 1000.0),
        name: "AllTests",
        testsuites,
    };

    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

fn json_case<'a>(record: &'a ExecutionRecord<'_>) -> JsonCase<'a> {
    JsonCase {
        name: record.case.name(),
        status: "RUN",
        result: if record.passed() { "COMPLETED" } else { "FAILED" },
        time: seconds(record.elapsed_secs()),
        classname: record.case.suite(),
        failures: record
            .outcomes
            .iter()
            .map(|outcome| JsonFailure {
                failure: format!("{}\n{}", outcome.location(), outcome.message),
                kind: "",
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::AssertionOutcome;
    use crate::registry::Registry;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::time::Duration;

    #[test]
    fn test_json_layout() {
        let mut registry = Registry::new();
        registry.register("Math", "Adds", |_| Ok(()));
        registry.register("Math", "Quotes", |_| Ok(()));

        let cases = registry.all();
        let records = vec![
            ExecutionRecord {
                case: &cases[0],
                outcomes: vec![],
                elapsed: Duration::from_millis(4),
            },
            ExecutionRecord {
                case: &cases[1],
                outcomes: vec![AssertionOutcome {
                    fatal: true,
                    message: "Expected: a < \"b\" is true".to_string(),
                    file: "m.rs".to_string(),
                    line: 5,
                }],
                elapsed: Duration::from_millis(1),
            },
        ];
        let summary = RunSummary::from_records(&records);

        let value: Value = serde_json::from_str(&render(&records, &summary).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "tests": 2,
                "failures": 1,
                "disabled": 0,
                "errors": 0,
                "time": "0.005s",
                "name": "AllTests",
                "testsuites": [{
                    "name": "Math",
                    "tests": 2,
                    "failures": 1,
                    "disabled": 0,
                    "errors": 0,
                    "time": "0.005s",
                    "testsuite": [
                        {
                            "name": "Adds",
                            "status": "RUN",
                            "result": "COMPLETED",
                            "time": "0.004s",
                            "classname": "Math"
                        },
                        {
                            "name": "Quotes",
                            "status": "RUN",
                            "result": "FAILED",
                            "time": "0.001s",
                            "classname": "Math",
                            "failures": [{
                                "failure": "m.rs:5\nExpected: a < \"b\" is true",
                                "type": ""
                            }]
                        }
                    ]
                }]
            })
        );
    }
}
