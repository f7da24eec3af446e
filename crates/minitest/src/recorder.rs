//! Assertion recording
//!
//! A [`Recorder`] is created fresh for every test and passed into the body by
//! `&mut`. Checks append an [`AssertionOutcome`] when they fail. Fatal checks
//! additionally return `Err(Abort::Fatal)`, which the `require_*` macros
//! propagate with `?` so the rest of the body is skipped.

use crate::error::{Abort, BodyResult};
use std::fmt::Debug;
use std::panic::Location;

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionOutcome {
    /// Whether the check was fatal
    pub fatal: bool,
    /// Failure message
    pub message: String,
    /// Source file of the check
    pub file: String,
    /// Source line of the check
    pub line: u32,
}

impl AssertionOutcome {
    /// `file:line`, as used in console and report output
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

/// Collects assertion outcomes for one test execution
#[derive(Debug)]
pub struct Recorder {
    outcomes: Vec<AssertionOutcome>,
    active: bool,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    /// Create an active recorder with no outcomes
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            active: true,
        }
    }

    /// Create a recorder that ignores every check.
    ///
    /// Bodies invoked outside the runner can use this; failed checks neither
    /// record anything nor abort.
    pub fn detached() -> Self {
        Self {
            outcomes: Vec::new(),
            active: false,
        }
    }

    /// Check if this recorder stores outcomes
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Record a failed check.
    ///
    /// Returns `Err(Abort::Fatal)` for fatal failures on an active recorder.
    pub fn record(
        &mut self,
        file: &str,
        line: u32,
        message: impl Into<String>,
        fatal: bool,
    ) -> BodyResult {
        if !self.active {
            return Ok(());
        }
        self.outcomes.push(AssertionOutcome {
            fatal,
            message: message.into(),
            file: file.to_string(),
            line,
        });
        if fatal {
            Err(Abort::Fatal)
        } else {
            Ok(())
        }
    }

    /// Equality check; passes iff `a == b`.
    #[track_caller]
    pub fn check_eq<A, B>(
        &mut self,
        a: &A,
        b: &B,
        a_expr: &str,
        b_expr: &str,
        fatal: bool,
    ) -> BodyResult
    where
        A: PartialEq<B> + Debug + ?Sized,
        B: Debug + ?Sized,
    {
        if a == b {
            return Ok(());
        }
        let message = comparison_message("equality", a, b, a_expr, b_expr);
        self.record_here(Location::caller(), message, fatal)
    }

    /// Inequality check; passes iff `a != b`.
    #[track_caller]
    pub fn check_ne<A, B>(
        &mut self,
        a: &A,
        b: &B,
        a_expr: &str,
        b_expr: &str,
        fatal: bool,
    ) -> BodyResult
    where
        A: PartialEq<B> + Debug + ?Sized,
        B: Debug + ?Sized,
    {
        if a != b {
            return Ok(());
        }
        let message = comparison_message("inequality", a, b, a_expr, b_expr);
        self.record_here(Location::caller(), message, fatal)
    }

    /// Boolean check; passes iff `value` is true.
    #[track_caller]
    pub fn check_true(&mut self, value: bool, expr: &str, fatal: bool) -> BodyResult {
        if value {
            return Ok(());
        }
        self.record_here(
            Location::caller(),
            format!("Expected: {} is true", expr),
            fatal,
        )
    }

    /// Boolean check; passes iff `value` is false.
    #[track_caller]
    pub fn check_false(&mut self, value: bool, expr: &str, fatal: bool) -> BodyResult {
        if !value {
            return Ok(());
        }
        self.record_here(
            Location::caller(),
            format!("Expected: {} is false", expr),
            fatal,
        )
    }

    /// Outcomes recorded so far
    pub fn outcomes(&self) -> &[AssertionOutcome] {
        &self.outcomes
    }

    /// Check if any check has failed
    pub fn has_failures(&self) -> bool {
        !self.outcomes.is_empty()
    }

    /// Consume the recorder, returning its outcomes
    pub fn into_outcomes(self) -> Vec<AssertionOutcome> {
        self.outcomes
    }

    fn record_here(&mut self, at: &Location<'_>, message: String, fatal: bool) -> BodyResult {
        self.record(at.file(), at.line(), message, fatal)
    }
}

fn comparison_message<A, B>(kind: &str, a: &A, b: &B, a_expr: &str, b_expr: &str) -> String
where
    A: Debug + ?Sized,
    B: Debug + ?Sized,
{
    format!(
        "Expected {} of these values:\n  {}\n    Which is: {:?}\n  {}\n    Which is: {:?}",
        kind, a_expr, a, b_expr, b
    )
}
