//! Run configuration from arguments and environment variables
//!
//! Only the report destination is read from the command line:
//! `--report_output=<format>[:<path>]` (or the `--gtest_output=` alias).
//! Everything else comes from the environment:
//!
//! - `MINITEST_OUTPUT` - report destination when no flag is given
//! - `MINITEST_COLOR`  - `auto` (default), `always` or `never`
//! - `NO_COLOR`        - disables colour unless `MINITEST_COLOR=always`
//! - `MINITEST_LOG`    - tracing filter for diagnostics on stderr

use crate::error::ConfigError;
use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

const REPORT_FLAGS: [&str; 2] = ["--report_output=", "--gtest_output="];

/// Structured report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Xml,
    Json,
}

impl ReportFormat {
    fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "xml" => Ok(ReportFormat::Xml),
            "json" => Ok(ReportFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }

    /// File used when the option names a format but no path
    pub fn default_file(self) -> &'static str {
        match self {
            ReportFormat::Xml => "test_detail.xml",
            ReportFormat::Json => "test_detail.json",
        }
    }

    /// Upper-case name for log and warning messages
    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Xml => "XML",
            ReportFormat::Json => "JSON",
        }
    }
}

/// Where and how to write the structured report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    pub format: ReportFormat,
    pub path: PathBuf,
}

impl ReportTarget {
    /// Create an XML report target
    pub fn xml(path: impl Into<PathBuf>) -> Self {
        Self {
            format: ReportFormat::Xml,
            path: path.into(),
        }
    }

    /// Create a JSON report target
    pub fn json(path: impl Into<PathBuf>) -> Self {
        Self {
            format: ReportFormat::Json,
            path: path.into(),
        }
    }

    /// Parse an option value such as `xml:out/report.xml` or `json`
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let (format, path) = match value.split_once(':') {
            Some((format, path)) => (ReportFormat::parse(format)?, path),
            None => (ReportFormat::parse(value)?, ""),
        };
        let path = if path.is_empty() {
            PathBuf::from(format.default_file())
        } else {
            PathBuf::from(path)
        };
        Ok(Self { format, path })
    }
}

/// Console colour preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "yes" | "1" | "true" => Ok(ColorChoice::Always),
            "never" | "no" | "0" | "false" => Ok(ColorChoice::Never),
            _ => Err(ConfigError::InvalidEnv {
                var: "MINITEST_COLOR".to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Resolve against the environment and whether stdout is a terminal
    pub fn enabled(self, no_color: bool, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !no_color && is_terminal,
        }
    }
}

/// Configuration for one test run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Structured report destination, if any
    pub report: Option<ReportTarget>,
    /// Colour the console tags
    pub color: bool,
    /// Tracing filter directive (MINITEST_LOG)
    pub log_filter: Option<String>,
}

impl RunConfig {
    /// Load from the process arguments and environment
    pub fn from_env() -> Self {
        // A non-UTF-8 argument can never be the report flag
        Self::from_args_and_env(env::args_os().skip(1).filter_map(|arg| arg.into_string().ok()))
    }

    /// Load from an explicit argument list plus the environment.
    ///
    /// The last report flag wins; a flag overrides `MINITEST_OUTPUT`. Invalid
    /// values are ignored with a warning.
    pub fn from_args_and_env<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let report = report_from_args(args)
            .or_else(|| env::var("MINITEST_OUTPUT").ok())
            .and_then(|value| match ReportTarget::parse(&value) {
                Ok(target) => Some(target),
                Err(e) => {
                    tracing::debug!(target: "minitest::config", error = %e, "Ignoring report option");
                    eprintln!("Warning: {}; no report will be written", e);
                    None
                }
            });

        let choice = match env::var("MINITEST_COLOR") {
            Ok(value) => ColorChoice::parse(&value).unwrap_or_else(|e| {
                tracing::warn!(target: "minitest::config", error = %e, "Falling back to automatic colour");
                ColorChoice::Auto
            }),
            Err(_) => ColorChoice::Auto,
        };
        let no_color = env::var_os("NO_COLOR").is_some();

        Self {
            report,
            color: choice.enabled(no_color, std::io::stdout().is_terminal()),
            log_filter: env::var("MINITEST_LOG").ok(),
        }
    }
}

/// Last report flag value in the argument list
fn report_from_args<I, S>(args: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .filter_map(|arg| {
            let arg = arg.as_ref();
            REPORT_FLAGS
                .iter()
                .find_map(|flag| arg.strip_prefix(flag))
                .map(str::to_string)
        })
        .last()
}
