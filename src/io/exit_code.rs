//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - every file checked is grouped correctly (or was fixed)
//! - `1`: Violations remain in at least one file
//! - `2`: Blocking error - internal failure that should halt automation
//! - `3-125`: Specific errors
//! - `126-255`: Reserved by shell

use crate::error::LintError;
use crate::lint::LintSummary;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No violations left (code 0)
    Success = 0,

    /// Grouping violations remain (code 1)
    Violations = 1,

    /// Critical error that should halt automation (code 2)
    BlockingError = 2,

    /// Failed to parse files (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,

    /// File type not supported (code 8)
    UnsupportedOperation = 8,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `LintError` to the appropriate exit code.
    pub fn from_error(error: &LintError) -> Self {
        match error {
            LintError::Parse { .. } => ExitCode::ParseError,
            LintError::FileRead { .. } | LintError::FileWrite { .. } => ExitCode::IoError,
            LintError::InvalidPattern { .. }
            | LintError::InvalidLabel { .. }
            | LintError::ConfigError { .. } => ExitCode::ConfigError,
            LintError::UnsupportedFileType { .. } => ExitCode::UnsupportedOperation,
            LintError::InvalidEdit { .. } | LintError::General(_) => ExitCode::BlockingError,
        }
    }

    /// Map a per-file error status code back to an exit code.
    fn from_status_code(code: &str) -> Self {
        match code {
            "PARSE_ERROR" => ExitCode::ParseError,
            "FILE_READ_ERROR" | "FILE_WRITE_ERROR" => ExitCode::IoError,
            "UNSUPPORTED_FILE_TYPE" => ExitCode::UnsupportedOperation,
            "INVALID_PATTERN" | "INVALID_LABEL" | "CONFIG_ERROR" => ExitCode::ConfigError,
            _ => ExitCode::BlockingError,
        }
    }

    /// Exit code for a finished lint run.
    ///
    /// Remaining violations take precedence; otherwise the first per-file
    /// error decides.
    pub fn from_summary(summary: &LintSummary) -> Self {
        if summary.remaining_count() > 0 {
            return ExitCode::Violations;
        }
        summary
            .errors
            .first()
            .map_or(ExitCode::Success, |e| Self::from_status_code(&e.code))
    }

    /// Check if this exit code indicates a blocking error.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self, ExitCode::BlockingError)
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Stable status code, in the same style as `LintError::status_code`.
    pub fn status_code(&self) -> &'static str {
        match self {
            ExitCode::Success => "OK",
            ExitCode::Violations => "VIOLATIONS",
            ExitCode::BlockingError => "BLOCKING_ERROR",
            ExitCode::ParseError => "PARSE_ERROR",
            ExitCode::IoError => "IO_ERROR",
            ExitCode::ConfigError => "CONFIG_ERROR",
            ExitCode::UnsupportedOperation => "UNSUPPORTED_FILE_TYPE",
        }
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::Violations => "Import grouping violations found",
            ExitCode::BlockingError => "Blocking error - automation should halt",
            ExitCode::ParseError => "Parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
            ExitCode::UnsupportedOperation => "Unsupported file type",
        }
    }
}
