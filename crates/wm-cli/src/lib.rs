//! Library side of the `ward-mining` binary.
//!
//! Kept separate from `main.rs` so settings resolution, exit-code mapping
//! and the pipeline itself can be tested without spawning a process.

pub mod exit_codes;
pub mod logging;
pub mod run;
pub mod settings;

pub use exit_codes::ExitCode;
pub use run::{run, RunError, RunSummary};
pub use settings::{ReportOverrides, Settings, SettingsError};
