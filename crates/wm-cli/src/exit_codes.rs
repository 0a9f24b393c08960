//! Exit codes for the ward-mining CLI.
//!
//! Exit code ranges:
//! - 0: Dashboard written
//! - 1-9: Pipeline failures (input could not be read, output could not be written)
//! - 10-19: User errors (bad arguments or configuration)

/// Exit codes for ward-mining runs.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Dashboard written
    Clean = 0,

    /// Workbook missing, unreadable or malformed; nothing written
    LoadError = 1,

    /// Output file could not be written
    WriteError = 2,

    /// Invalid arguments or report configuration
    ArgsError = 10,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Check if this exit code is a user error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&(self as i32))
    }

    /// Get the error code name as a string constant (for log output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::LoadError => "ERR_LOAD",
            ExitCode::WriteError => "ERR_WRITE",
            ExitCode::ArgsError => "ERR_ARGS",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
