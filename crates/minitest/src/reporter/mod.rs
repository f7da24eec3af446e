//! Reporting: console progress and structured report files

pub mod console;
pub mod json;
pub mod xml;

pub use console::ConsoleReporter;

use crate::config::{ReportFormat, ReportTarget};
use crate::error::ReportError;
use crate::runner::{ExecutionRecord, RunSummary};
use std::fs;

/// Render the report for `target` and write it, creating parent directories.
pub fn write_report(
    target: &ReportTarget,
    records: &[ExecutionRecord<'_>],
    summary: &RunSummary,
) -> Result<(), ReportError> {
    let contents = match target.format {
        ReportFormat::Xml => xml::render(records, summary),
        ReportFormat::Json => json::render(records, summary)?,
    };

    if let Some(parent) = target.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ReportError::create_dir(parent, e))?;
        }
    }

    fs::write(&target.path, contents).map_err(|e| ReportError::write(&target.path, e))
}
