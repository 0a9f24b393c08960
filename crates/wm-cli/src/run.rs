//! The load → aggregate → render → write pipeline.

use crate::exit_codes::ExitCode;
use crate::settings::Settings;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tracing::info;
use wm_core::{load_workbook, Aggregates, CaseIndex, LoadError};
use wm_report::{ReportData, ReportError, ReportGenerator};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RunError::Load(_) => ExitCode::LoadError,
            RunError::Report(ReportError::InvalidConfig(_)) => ExitCode::ArgsError,
            RunError::Report(_) | RunError::Write { .. } => ExitCode::WriteError,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub cases: usize,
    pub bytes: usize,
    pub output: PathBuf,
}

/// Build the dashboard for `settings.input` and write it to `settings.output`.
///
/// Nothing is written unless loading and rendering both succeed.
pub fn run(settings: &Settings) -> Result<RunSummary, RunError> {
    let started = Instant::now();

    let table = load_workbook(&settings.input)?;
    let cases = CaseIndex::build(&table);
    let aggregates = Aggregates::compute(&table, &cases);
    info!(
        events = table.len(),
        cases = cases.len(),
        "Workbook aggregated"
    );

    let mut data = ReportData::new(aggregates);
    if let Some(name) = settings.input.file_name() {
        data = data.with_source(name.to_string_lossy());
    }
    let html = ReportGenerator::new(settings.report.clone()).generate(&data)?;

    std::fs::write(&settings.output, &html).map_err(|source| RunError::Write {
        path: settings.output.clone(),
        source,
    })?;

    info!(
        output = %settings.output.display(),
        bytes = html.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Dashboard written"
    );

    Ok(RunSummary {
        events: table.len(),
        cases: cases.len(),
        bytes: html.len(),
        output: settings.output.clone(),
    })
}
