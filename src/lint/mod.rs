//! Per-file and per-tree lint orchestration
//!
//! Files are independent: each is read, parsed, checked and optionally
//! fixed on its own, so a tree is linted in parallel with one parser per
//! worker thread.

pub mod walker;

pub use walker::FileWalker;

use crate::Settings;
use crate::error::{LintError, LintResult};
use crate::fix::apply_fix;
use crate::parsing::{Language, SourceParser};
use crate::rule::{Diagnostic, ImportGroupingRule};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of linting one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the diagnostics were fixed
    pub fixed: bool,
    /// Fixed text, present when a fix was applied
    #[serde(skip)]
    pub output: Option<String>,
}

impl FileReport {
    fn clean(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            diagnostics: Vec::new(),
            fixed: false,
            output: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A file that could not be linted
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub code: String,
    pub message: String,
}

impl FileError {
    fn new(path: &Path, error: &LintError) -> Self {
        Self {
            path: path.to_path_buf(),
            code: error.status_code(),
            message: error.to_string(),
        }
    }
}

/// Result of linting a set of paths
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    pub files_checked: usize,
    /// Reports for files with diagnostics, sorted by path
    pub reports: Vec<FileReport>,
    pub errors: Vec<FileError>,
}

impl LintSummary {
    pub fn violation_count(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    pub fn fixed_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.fixed)
            .map(|r| r.diagnostics.len())
            .sum()
    }

    /// Violations left in the files after this run
    pub fn remaining_count(&self) -> usize {
        self.violation_count() - self.fixed_count()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub struct Linter {
    rule: ImportGroupingRule,
    settings: Arc<Settings>,
    fix: bool,
}

impl Linter {
    /// Build a linter; fails when the configured groups are invalid
    pub fn new(settings: Arc<Settings>) -> LintResult<Self> {
        let rule = ImportGroupingRule::from_settings(&settings)?;
        Ok(Self {
            rule,
            settings,
            fix: false,
        })
    }

    /// Apply fixes and write fixed files back to disk
    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    pub fn rule(&self) -> &ImportGroupingRule {
        &self.rule
    }

    /// Lint in-memory source text. Nothing is written.
    pub fn lint_source(
        &self,
        parser: &mut SourceParser,
        path: &Path,
        text: &str,
    ) -> LintResult<FileReport> {
        let language = Language::from_path(path).ok_or_else(|| LintError::UnsupportedFileType {
            path: path.to_path_buf(),
            extension: path
                .extension()
                .map(|e| e.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })?;

        let parse = |parser: &mut SourceParser, text: &str| {
            parser.parse(text, language).map_err(|source| LintError::Parse {
                path: path.to_path_buf(),
                language: language.name().to_string(),
                source,
            })
        };

        let parsed = parse(parser, text)?;
        let mut report = FileReport::clean(path);
        let Some(diagnostic) = self.rule.check(&parsed) else {
            return Ok(report);
        };
        debug!(
            "{}: {} import groups out of order",
            path.display(),
            parsed.language()
        );

        if self.fix {
            if let Some(fix) = diagnostic.fix.as_ref().filter(|f| !f.is_empty()) {
                let output = apply_fix(text, fix)?;
                // A rewrite that does not pass the check is left unwritten
                if self.rule.check(&parse(parser, &output)?).is_some() {
                    warn!(
                        "{}: fixed imports still fail the grouping check; leaving file unchanged",
                        path.display()
                    );
                } else {
                    report.fixed = true;
                    report.output = Some(output);
                }
            }
        }

        report.diagnostics.push(diagnostic);
        Ok(report)
    }

    /// Read, lint and (in fix mode) rewrite one file
    pub fn lint_file(&self, parser: &mut SourceParser, path: &Path) -> LintResult<FileReport> {
        let text = std::fs::read_to_string(path).map_err(|source| LintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self.lint_source(parser, path, &text)?;
        if let Some(output) = &report.output {
            std::fs::write(path, output).map_err(|source| LintError::FileWrite {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Fixed import groups in {}", path.display());
        }
        Ok(report)
    }

    /// Expand directories into the files to lint. Explicit file paths are
    /// kept as given, whatever their extension.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        let walker = FileWalker::new(self.settings.clone());
        let mut files: Vec<PathBuf> = paths
            .iter()
            .flat_map(|path| -> Box<dyn Iterator<Item = PathBuf>> {
                if path.is_dir() {
                    Box::new(walker.walk(path))
                } else {
                    Box::new(std::iter::once(path.clone()))
                }
            })
            .collect();
        files.sort();
        files.dedup();
        files
    }

    /// Lint every file under `paths`. Per-file failures are collected in
    /// the summary and do not stop the run.
    pub fn lint_paths(&self, paths: &[PathBuf]) -> LintSummary {
        let files = self.collect_files(paths);
        info!("Checking {} file(s)", files.len());

        let results: Vec<(&PathBuf, LintResult<FileReport>)> = files
            .par_iter()
            .map_init(SourceParser::new, |parser, path| {
                (path, self.lint_file(parser, path))
            })
            .collect();

        let mut summary = LintSummary {
            files_checked: files.len(),
            ..LintSummary::default()
        };
        for (path, result) in results {
            match result {
                Ok(report) if report.is_clean() => {}
                Ok(report) => summary.reports.push(report),
                Err(e) => {
                    warn!("{e}");
                    summary.errors.push(FileError::new(path, &e));
                }
            }
        }
        summary
    }
}
