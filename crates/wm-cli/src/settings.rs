//! Run settings: input and output paths plus the report configuration.
//!
//! Resolution order for the report configuration: defaults, then the JSON
//! file given with `--config`, then individual CLI flags.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use wm_report::{ReportConfig, ReportTheme};

/// Workbook looked up next to the executable when no input is given.
pub const DEFAULT_INPUT_NAME: &str = "ADC系統_總表V2.xlsx";
/// Dashboard written to the working directory when no output is given.
pub const DEFAULT_OUTPUT: &str = "index.html";

/// Errors that can occur while resolving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Report config not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in report config {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-field overrides taken from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ReportOverrides {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub theme: Option<ReportTheme>,
    pub color_seed: Option<u64>,
}

impl ReportOverrides {
    /// Apply every set override to `config`.
    pub fn apply(self, mut config: ReportConfig) -> ReportConfig {
        if let Some(title) = self.title {
            config = config.with_title(title);
        }
        if let Some(subtitle) = self.subtitle {
            config = config.with_subtitle(subtitle);
        }
        if let Some(theme) = self.theme {
            config = config.with_theme(theme);
        }
        if let Some(seed) = self.color_seed {
            config = config.with_color_seed(seed);
        }
        config
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: ReportConfig,
}

impl Settings {
    pub fn resolve(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        config_path: Option<&Path>,
        overrides: ReportOverrides,
    ) -> Result<Self, SettingsError> {
        let report = match config_path {
            Some(path) => load_report_config(path)?,
            None => ReportConfig::default(),
        };

        let settings = Settings {
            input: input.unwrap_or_else(default_input_path),
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            report: overrides.apply(report),
        };
        debug!(
            input = %settings.input.display(),
            output = %settings.output.display(),
            config = ?config_path,
            "Settings resolved"
        );
        Ok(settings)
    }
}

/// [`DEFAULT_INPUT_NAME`] in the directory holding the running executable,
/// or in the working directory if that cannot be determined.
pub fn default_input_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_INPUT_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_NAME))
}

/// Read a [`ReportConfig`] from a JSON file.
pub fn load_report_config(path: &Path) -> Result<ReportConfig, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SettingsError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SettingsError::IoError {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    ReportConfig::from_json(&content).map_err(|source| SettingsError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
