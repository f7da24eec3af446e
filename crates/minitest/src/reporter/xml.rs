//! JUnit-style XML report, in the layout GoogleTest emits
//!
//! Messages are written verbatim. A message containing `<`, `&` or `"`
//! produces a malformed document; existing consumers depend on the raw text.

use crate::runner::{ExecutionRecord, RunSummary};
use std::collections::BTreeMap;

/// Render the full report document
pub fn render(records: &[ExecutionRecord<'_>], summary: &RunSummary) -> String {
    let mut by_suite: BTreeMap<&str, Vec<&ExecutionRecord<'_>>> = BTreeMap::new();
    for record in records {
        by_suite.entry(record.case.suite()).or_default().push(record);
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<testsuites tests=\"{}\" failures=\"{}\" disabled=\"0\" errors=\"0\">\n",
        summary.total, summary.assertion_failures
    ));

    for suite in &summary.suites {
        out.push_str(&format!(
            "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" disabled=\"0\" errors=\"0\" time=\"{:.3}\">\n",
            suite.name, suite.tests, suite.failures, suite.time_secs
        ));
        for record in by_suite.get(suite.name.as_str()).into_iter().flatten() {
            push_testcase(&mut out, record);
        }
        out.push_str("  </testsuite>\n");
    }

    out.push_str("</testsuites>\n");
    out
}

fn push_testcase(out: &mut String, record: &ExecutionRecord<'_>) {
    out.push_str(&format!(
        "    <testcase name=\"{}\" status=\"run\" result=\"{}\" time=\"{:.3}\" classname=\"{}\">",
        record.case.name(),
        if record.passed() { "completed" } else { "failed" },
        record.elapsed_secs(),
        record.case.suite()
    ));

    if record.passed() {
        out.push_str("</testcase>\n");
        return;
    }

    out.push('\n');
    for outcome in &record.outcomes {
        out.push_str(&format!(
            "      <failure message=\"{}\" type=\"\">\n",
            outcome.message
        ));
        out.push_str(&format!("{}\n", outcome.location()));
        out.push_str(&format!("{}\n", outcome.message));
        out.push_str("      </failure>\n");
    }
    out.push_str("    </testcase>\n");
}
