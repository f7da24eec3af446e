//! Test registration
//!
//! Tests are registered by plain functions (`fn(&mut Registry)`), one per
//! test unit, which the entry point lists explicitly. Registration order is
//! execution order.

use crate::error::BodyResult;
use crate::recorder::Recorder;
use std::collections::BTreeSet;
use std::fmt;

/// A test body: receives the recorder for the current execution.
pub type TestFn = Box<dyn Fn(&mut Recorder) -> BodyResult + Send + Sync>;

/// A function that registers one unit's tests
pub type Registrar = fn(&mut Registry);

/// A registered test case
pub struct TestCase {
    suite: String,
    name: String,
    body: TestFn,
}

impl TestCase {
    /// Suite the test belongs to
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Test name within its suite
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Suite.Name`, as printed on the console
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.suite, self.name)
    }

    /// Invoke the body with the given recorder.
    pub fn invoke(&self, recorder: &mut Recorder) -> BodyResult {
        (self.body)(recorder)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("suite", &self.suite)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of test cases
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry by running each registrar in order
    pub fn collect(registrars: &[Registrar]) -> Self {
        let mut registry = Registry::new();
        for register in registrars {
            register(&mut registry);
        }
        tracing::debug!(
            target: "minitest::registry",
            tests = registry.len(),
            suites = registry.suite_count(),
            "Registry collected"
        );
        registry
    }

    /// Append a test case.
    ///
    /// Empty names and duplicate `(suite, name)` pairs are accepted; every
    /// registration runs.
    pub fn register<F>(&mut self, suite: impl Into<String>, name: impl Into<String>, body: F)
    where
        F: Fn(&mut Recorder) -> BodyResult + Send + Sync + 'static,
    {
        self.cases.push(TestCase {
            suite: suite.into(),
            name: name.into(),
            body: Box::new(body),
        });
    }

    /// All test cases in registration order
    pub fn all(&self) -> &[TestCase] {
        &self.cases
    }

    /// Number of registered tests
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if no tests are registered
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Number of distinct suite names
    pub fn suite_count(&self) -> usize {
        self.cases
            .iter()
            .map(|case| case.suite.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
