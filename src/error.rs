//! Error types for the import grouping linter
//!
//! The grouping engine itself never fails. Errors only arise at the edges:
//! reading and writing files, parsing source text, compiling configured
//! patterns, and applying edits.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lint operations
#[derive(Error, Debug)]
pub enum LintError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parsing errors
    #[error("Failed to parse {language} file '{path}': {source}")]
    Parse {
        path: PathBuf,
        language: String,
        source: ParseError,
    },

    #[error(
        "Unsupported file type '{extension}' for file '{path}'. Supported types: .js, .mjs, .cjs, .jsx, .ts, .mts, .cts, .tsx, .vue"
    )]
    UnsupportedFileType { path: PathBuf, extension: String },

    /// Configuration errors
    #[error("Invalid group pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid group label {label:?}: labels must be single-line '//' comments")]
    InvalidLabel { label: String },

    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// Fix application errors
    #[error("Cannot apply edit at {start}..{end}: {reason}")]
    InvalidEdit {
        start: usize,
        end: usize,
        reason: String,
    },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl LintError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON output
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            Self::InvalidPattern { .. } => "INVALID_PATTERN",
            Self::InvalidLabel { .. } => "INVALID_LABEL",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::InvalidEdit { .. } => "INVALID_EDIT",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::FileWrite { .. } => vec![
                "Check that you have write permissions for the file",
                "Run without --fix to only report violations",
            ],
            Self::InvalidPattern { .. } => vec![
                "Group patterns use Rust regex syntax (no look-around or backreferences)",
                "Run 'import-grouping groups' to inspect the resolved group order",
            ],
            Self::InvalidLabel { .. } => vec![
                "Write labels as line comments, for example \"// utils\"",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'import-grouping init --force' to regenerate the settings file",
            ],
            Self::UnsupportedFileType { .. } => vec![
                "Only JavaScript, TypeScript and Vue single-file components are checked",
            ],
            _ => vec![],
        }
    }

    /// True for errors that invalidate the whole run rather than one file.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::InvalidLabel { .. } | Self::ConfigError { .. }
        )
    }
}

/// Errors specific to parsing operations
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("tree-sitter produced no syntax tree")]
    TreeUnavailable,

    #[error("Invalid UTF-8 in source file")]
    InvalidUtf8,
}

/// Result type alias for lint operations
pub type LintResult<T> = Result<T, LintError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, msg: &str) -> Result<T, LintError>;

    /// Add context with a path
    fn with_path(self, path: &std::path::Path) -> Result<T, LintError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: &str) -> Result<T, LintError> {
        self.map_err(|e| LintError::General(format!("{msg}: {e}")))
    }

    fn with_path(self, path: &std::path::Path) -> Result<T, LintError> {
        self.map_err(|e| LintError::General(format!("Error processing '{}': {}", path.display(), e)))
    }
}
