//! Test runner - execute registered tests

use crate::config::{ReportTarget, RunConfig};
use crate::error::Abort;
use crate::recorder::{AssertionOutcome, Recorder};
use crate::registry::{Registry, TestCase};
use crate::reporter::{self, ConsoleReporter};
use std::any::Any;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::{Duration, Instant};

/// File recorded for failures that did not come from a check
pub const UNKNOWN_FILE: &str = "unknown";

thread_local! {
    static IN_BODY: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the panic hook so panics inside a test body print nothing.
///
/// They are reported as test failures instead. Panics anywhere else still
/// reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !in_body() {
                previous(info);
            }
        }));
    });
}

fn in_body() -> bool {
    IN_BODY.with(Cell::get)
}

/// The realized outcome of running one test case
#[derive(Debug)]
pub struct ExecutionRecord<'a> {
    /// The test that was run
    pub case: &'a TestCase,
    /// Failed checks, in the order they were recorded
    pub outcomes: Vec<AssertionOutcome>,
    /// Wall-clock time spent in the body
    pub elapsed: Duration,
}

impl ExecutionRecord<'_> {
    /// Check if the test passed
    pub fn passed(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Elapsed time in whole milliseconds, as shown on the console
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed time in seconds, as written to structured reports
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms() as f64 / 1000.0
    }
}

/// Per-suite totals
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteSummary {
    pub name: String,
    /// Number of tests in the suite
    pub tests: usize,
    /// Number of assertion failures across the suite's tests
    pub failures: usize,
    /// Sum of the suite's test durations, in seconds
    pub time_secs: f64,
}

/// Aggregate counts for a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Number of assertion failures across every test
    pub assertion_failures: usize,
    /// `Suite.Name` of every failed test, in execution order
    pub failed_tests: Vec<String>,
    /// Suites in alphabetical order
    pub suites: Vec<SuiteSummary>,
    /// Sum of all test durations, in whole milliseconds
    pub elapsed_ms: u64,
}

impl RunSummary {
    /// Derive the summary from execution records
    pub fn from_records(records: &[ExecutionRecord<'_>]) -> Self {
        let mut suites: BTreeMap<&str, SuiteSummary> = BTreeMap::new();
        for record in records {
            let suite = record.case.suite();
            let entry = suites.entry(suite).or_insert_with(|| SuiteSummary {
                name: suite.to_string(),
                tests: 0,
                failures: 0,
                time_secs: 0.0,
            });
            entry.tests += 1;
            entry.failures += record.outcomes.len();
            entry.time_secs += record.elapsed_secs();
        }

        let passed = records.iter().filter(|r| r.passed()).count();
        Self {
            total: records.len(),
            passed,
            failed: records.len() - passed,
            assertion_failures: records.iter().map(|r| r.outcomes.len()).sum(),
            failed_tests: records
                .iter()
                .filter(|r| !r.passed())
                .map(|r| r.case.full_name())
                .collect(),
            suites: suites.into_values().collect(),
            elapsed_ms: records.iter().map(|r| r.elapsed_ms()).sum(),
        }
    }

    /// Check if every test passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: 0 iff every test passed
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Sequential test runner
#[derive(Debug, Clone, Default)]
pub struct TestRunner {
    /// Structured report destination
    report: Option<ReportTarget>,
    /// Colour console tags
    color: bool,
}

impl TestRunner {
    /// Create a runner with no report and plain console output
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner from a loaded configuration
    pub fn from_config(config: &RunConfig) -> Self {
        Self {
            report: config.report.clone(),
            color: config.color,
        }
    }

    /// Write a structured report after the run
    pub fn with_report(mut self, target: ReportTarget) -> Self {
        self.report = Some(target);
        self
    }

    /// Enable or disable colour on the console
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Run every registered test in order, streaming console output to `out`.
    ///
    /// Failing tests, escaped errors, panics and report write failures never
    /// stop the run.
    pub fn run_all<W: Write>(&self, registry: &Registry, out: W) -> RunSummary {
        let mut console = ConsoleReporter::new(out).with_color(self.color);
        console.start(registry.len(), registry.suite_count());

        let mut records = Vec::with_capacity(registry.len());
        for case in registry.all() {
            console.test_start(case);
            let record = Self::execute(case);
            console.test_end(&record);
            records.push(record);
        }

        let summary = RunSummary::from_records(&records);
        console.finish(&summary);

        if let Some(target) = &self.report {
            match reporter::write_report(target, &records, &summary) {
                Ok(()) => tracing::info!(
                    target: "minitest::report",
                    path = %target.path.display(),
                    report_format = target.format.label(),
                    "Report written"
                ),
                Err(e) => {
                    tracing::debug!(target: "minitest::report", error = %e, "Report skipped");
                    eprintln!(
                        "Warning: failed to write {} report to {}: {}",
                        target.format.label(),
                        target.path.display(),
                        e
                    );
                }
            }
        }

        if let Some(e) = console.take_error() {
            tracing::warn!(target: "minitest::runner", error = %e, "Console output was truncated");
        }

        summary
    }

    /// Run a single test under a fresh recorder.
    pub fn execute(case: &TestCase) -> ExecutionRecord<'_> {
        install_quiet_hook();
        let mut recorder = Recorder::new();

        let start = Instant::now();
        IN_BODY.with(|flag| flag.set(true));
        let result = panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&mut recorder)));
        IN_BODY.with(|flag| flag.set(false));
        let elapsed = start.elapsed();

        let unhandled = match result {
            Ok(Ok(())) | Ok(Err(Abort::Fatal)) => None,
            Ok(Err(Abort::Error(e))) => Some(format!("Unhandled error: {}", e)),
            Err(payload) => Some(panic_message(payload.as_ref())),
        };
        if let Some(message) = unhandled {
            // Fatal by definition; the returned signal has nothing left to stop.
            let _ = recorder.record(UNKNOWN_FILE, 0, message, true);
        }

        let outcomes = recorder.into_outcomes();
        tracing::debug!(
            target: "minitest::runner",
            test = %case.full_name(),
            failures = outcomes.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Test finished"
        );

        ExecutionRecord {
            case,
            outcomes,
            elapsed,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("Unhandled panic: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("Unhandled panic: {}", s)
    } else {
        "Unhandled non-standard panic".to_string()
    }
}
