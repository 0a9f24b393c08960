//! Error types for workbook loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading the event workbook.
///
/// Both variants are terminal: the caller reports them and exits without
/// writing any output.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The workbook path does not resolve to a file.
    #[error("workbook not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The workbook exists but could not be read or parsed.
    #[error("failed to load workbook {}: {reason}", path.display())]
    LoadFailure { path: PathBuf, reason: String },
}

impl LoadError {
    /// Build a `LoadFailure` for `path`.
    pub fn failure(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        LoadError::LoadFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Stable short name for structured logs.
    pub fn code_name(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => "not_found",
            LoadError::LoadFailure { .. } => "load_failure",
        }
    }
}
