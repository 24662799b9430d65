//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::display::THEME;
use crate::error::LintError;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use crate::lint::{FileReport, LintSummary};
use crate::rule::ImportGroupingRule;
use serde::Serialize;
use std::io::{self, Write};

/// One row of the resolved group order
#[derive(Debug, Serialize)]
pub struct GroupInfo<'a> {
    pub label: &'a str,
    /// `None` for the catch-all group
    pub pattern: Option<&'a str>,
}

/// Manages output formatting and display.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager for testing with custom writers.
    #[cfg(test)]
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    /// Output the result of a lint run.
    ///
    /// Text mode prints one block per file with diagnostics followed by a
    /// summary line; per-file errors go to stderr.
    pub fn summary(&mut self, summary: &LintSummary) -> io::Result<ExitCode> {
        let code = ExitCode::from_summary(summary);

        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::with_exit_code(summary, code, &summary_line(summary))
                    .with_meta(ResponseMeta::current());
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                for report in &summary.reports {
                    self.report(report)?;
                }
                for error in &summary.errors {
                    writeln!(self.stderr, "{}", THEME.file_error(&error.path, &error.message))?;
                }
                writeln!(
                    self.stdout,
                    "{}",
                    THEME.outcome(&summary_line(summary), code.is_success())
                )?;
            }
        }
        Ok(code)
    }

    fn report(&mut self, report: &FileReport) -> io::Result<()> {
        writeln!(self.stdout, "{}", THEME.file_header(&report.path))?;
        for diagnostic in &report.diagnostics {
            writeln!(self.stdout, "{}", THEME.diagnostic(diagnostic, report.fixed))?;
        }
        writeln!(self.stdout)
    }

    /// Output the resolved group order.
    pub fn groups(&mut self, rule: &ImportGroupingRule) -> io::Result<ExitCode> {
        let rows: Vec<GroupInfo<'_>> = rule
            .order()
            .into_iter()
            .map(|label| GroupInfo {
                label,
                pattern: rule
                    .rules()
                    .iter()
                    .find(|r| r.label == label)
                    .map(|r| r.pattern()),
            })
            .collect();

        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::success(&rows);
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(
                    self.stdout,
                    "{}",
                    THEME.heading("Import groups (in emission order):")
                )?;
                for (i, row) in rows.iter().enumerate() {
                    writeln!(self.stdout, "{}", THEME.group_row(i + 1, row.label, row.pattern))?;
                }
            }
        }
        Ok(ExitCode::Success)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &LintError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "Error: {error}")?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn summary_line(summary: &LintSummary) -> String {
    let checked = plural(summary.files_checked, "file");
    let mut line = match (summary.remaining_count(), summary.fixed_count()) {
        (0, 0) => format!("{checked} checked, no problems"),
        (0, fixed) => format!("{checked} checked, fixed {}", plural(fixed, "problem")),
        (remaining, 0) => format!("{checked} checked, {}", plural(remaining, "problem")),
        (remaining, fixed) => format!(
            "{checked} checked, {} ({fixed} fixed)",
            plural(remaining, "problem")
        ),
    };
    if summary.has_errors() {
        line.push_str(&format!(", {} not checked", plural(summary.errors.len(), "file")));
    }
    line
}
