//! Console reporter - GoogleTest-style progress lines

use crate::registry::TestCase;
use crate::runner::{ExecutionRecord, RunSummary};
use colored::{Color, Colorize};
use std::fmt;
use std::io::{self, Write};

const BANNER: &str = "[==========]";
const SEPARATOR: &str = "[----------]";
const RUN: &str = "[ RUN      ]";
const OK: &str = "[       OK ]";
const PASSED: &str = "[  PASSED  ]";
const FAILED: &str = "[  FAILED  ]";

/// Streams run progress to a writer, line by line.
///
/// Write errors are remembered rather than returned so a closed stdout never
/// interrupts the run; the first one can be retrieved with
/// [`take_error`](ConsoleReporter::take_error).
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing plain text to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: false,
            error: None,
        }
    }

    /// Colour the bracketed tags
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Header printed before any test runs
    pub fn start(&mut self, tests: usize, suites: usize) {
        let banner = self.tag(BANNER, Color::Green);
        self.line(format_args!(
            "{} Running {} tests from {} test suites.",
            banner, tests, suites
        ));
        let separator = self.tag(SEPARATOR, Color::Green);
        self.line(format_args!("{} Global test environment set-up.", separator));
    }

    /// Line printed before a test body runs
    pub fn test_start(&mut self, case: &TestCase) {
        let tag = self.tag(RUN, Color::Green);
        self.line(format_args!("{} {}", tag, case.full_name()));
    }

    /// Result line for a finished test, followed by its failures
    pub fn test_end(&mut self, record: &ExecutionRecord<'_>) {
        let tag = if record.passed() {
            self.tag(OK, Color::Green)
        } else {
            self.tag(FAILED, Color::Red)
        };
        self.line(format_args!(
            "{} {} ({} ms)",
            tag,
            record.case.full_name(),
            record.elapsed_ms()
        ));
        for outcome in &record.outcomes {
            self.line(format_args!("{}: {}", outcome.location(), outcome.message));
        }
    }

    /// Teardown banner, totals, and the list of failed tests
    pub fn finish(&mut self, summary: &RunSummary) {
        let separator = self.tag(SEPARATOR, Color::Green);
        self.line(format_args!("{} Global test environment tear-down", separator));

        let banner = self.tag(BANNER, Color::Green);
        self.line(format_args!(
            "{} {} tests from {} test suites ran. ({} ms total)",
            banner,
            summary.total,
            summary.suites.len(),
            summary.elapsed_ms
        ));

        let passed = self.tag(PASSED, Color::Green);
        self.line(format_args!("{} {} tests.", passed, summary.passed));

        if summary.failed > 0 {
            let failed = self.tag(FAILED, Color::Red);
            self.line(format_args!(
                "{} {} tests, listed below:",
                failed, summary.failed
            ));
            for name in &summary.failed_tests {
                self.line(format_args!("{} {}", failed, name));
            }
        }
    }

    /// First write error, if any occurred
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Consume the reporter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn tag(&self, tag: &str, color: Color) -> String {
        if self.color {
            tag.color(color).to_string()
        } else {
            tag.to_string()
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let result = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}
