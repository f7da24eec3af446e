//! Error types for test bodies, configuration, and report writing

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type returned by every test body.
pub type BodyResult = Result<(), Abort>;

/// Early exit from a test body.
///
/// Any [`std::error::Error`] converts into `Abort::Error`, so bodies can use
/// `?` on library calls. `Abort` itself does not implement `Error`.
pub enum Abort {
    /// A fatal assertion failed. Its outcome is already recorded.
    Fatal,
    /// An error propagated out of the body.
    Error(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Abort {
    /// Wrap a plain message as an unhandled body error.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Abort::Error(message.into())
    }

    /// Check if this is the fatal-assertion signal
    pub fn is_fatal(&self) -> bool {
        matches!(self, Abort::Fatal)
    }
}

impl<E> From<E> for Abort
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Abort::Error(Box::new(error))
    }
}

/// Conversion for results carrying a boxed error.
///
/// `Box<dyn Error>` does not implement `Error`, so `?` cannot turn it into
/// an [`Abort`]. Call `.or_abort()?` instead.
pub trait ResultExt<T> {
    fn or_abort(self) -> Result<T, Abort>;
}

impl<T> ResultExt<T> for Result<T, Box<dyn std::error::Error + Send + Sync + 'static>> {
    fn or_abort(self) -> Result<T, Abort> {
        self.map_err(Abort::Error)
    }
}

impl<T> ResultExt<T> for Result<T, Box<dyn std::error::Error + 'static>> {
    fn or_abort(self) -> Result<T, Abort> {
        self.map_err(|e| Abort::msg(e.to_string()))
    }
}

impl fmt::Debug for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abort::Fatal => f.write_str("Fatal"),
            Abort::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
        }
    }
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abort::Fatal => f.write_str("fatal assertion"),
            Abort::Error(e) => write!(f, "{}", e),
        }
    }
}

/// Failures while writing a structured report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Create a directory-creation error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Invalid run configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown report format '{0}' (expected 'xml' or 'json')")]
    UnknownFormat(String),

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnv { var: String, value: String },
}
