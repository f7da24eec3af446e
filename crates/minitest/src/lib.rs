//! minitest - a small GoogleTest-style unit-test harness
//!
//! Tests are plain closures registered under a suite name. Each test receives
//! a [`Recorder`] and reports failures through the `expect_*` (non-fatal) and
//! `require_*` (fatal) macros. The runner executes tests in registration
//! order, prints GoogleTest-style progress lines, and can write an XML or JSON
//! report for CI.
//!
//! # Example
//!
//! ```no_run
//! use minitest::{expect_eq, require_true, Registry};
//!
//! fn register(registry: &mut Registry) {
//!     registry.register("Math", "Adds", |t| {
//!         expect_eq!(t, 2 + 3, 5);
//!         Ok(())
//!     });
//!     registry.register("Math", "Compares", |t| {
//!         require_true!(t, 3 > 2);
//!         Ok(())
//!     });
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     minitest::main(&[register])
//! }
//! ```
//!
//! Run the binary with `--report_output=xml:build/report.xml` to also write a
//! report file.

pub mod config;
pub mod error;
pub mod macros;
pub mod recorder;
pub mod registry;
pub mod reporter;
pub mod runner;

pub use config::{ReportFormat, ReportTarget, RunConfig};
pub use error::{Abort, BodyResult, ConfigError, ReportError, ResultExt};
pub use recorder::{AssertionOutcome, Recorder};
pub use registry::{Registrar, Registry, TestCase};
pub use runner::{ExecutionRecord, RunSummary, TestRunner};

use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run every test registered by `registrars` and return the process exit code.
///
/// Reads the report option from the process arguments and the colour and log
/// settings from the environment (see [`config`]).
pub fn main(registrars: &[Registrar]) -> ExitCode {
    let config = RunConfig::from_env();
    init_logging(config.log_filter.as_deref());
    if config.color {
        // colored applies its own terminal detection unless overridden
        colored::control::set_override(true);
    }

    let registry = Registry::collect(registrars);
    let summary = TestRunner::from_config(&config).run_all(&registry, io::stdout().lock());

    if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Install a stderr `tracing` subscriber.
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging(filter: Option<&str>) {
    let filter = filter
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}
