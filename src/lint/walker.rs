//! File system walker for discovering source files to lint
//!
//! This module provides directory traversal with support for:
//! - .gitignore rules
//! - A project-level `.importgroupingignore` file
//! - Ignore patterns from configuration
//! - Extension filtering

use crate::Settings;
use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::warn;

/// Custom ignore file honored next to .gitignore
pub const IGNORE_FILE: &str = ".importgroupingignore";

/// Walks directories to find source files to lint
#[derive(Debug)]
pub struct FileWalker {
    settings: Arc<Settings>,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Walk a directory and return an iterator of files to lint
    pub fn walk(&self, root: &Path) -> impl Iterator<Item = PathBuf> {
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(true) // Skip hidden files and directories
            .git_ignore(true) // Respect .gitignore files
            .git_global(true) // Respect global gitignore
            .git_exclude(true) // Respect .git/info/exclude
            .follow_links(false)
            .require_git(false); // Allow gitignore to work in non-git directories

        builder.add_custom_ignore_filename(IGNORE_FILE);
        builder.overrides(self.ignore_overrides(root));

        let extensions = self.settings.files.extensions.clone();

        builder
            .build()
            .filter_map(Result::ok) // Skip files we can't access
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .filter_map(move |entry| {
                let ext = entry.path().extension()?.to_str()?;
                extensions
                    .iter()
                    .any(|enabled| enabled.eq_ignore_ascii_case(ext))
                    .then(|| entry.into_path())
            })
    }

    /// Configured ignore patterns as negated overrides.
    ///
    /// Overrides are whitelists by default; a leading `!` turns each glob
    /// into an exclusion.
    fn ignore_overrides(&self, root: &Path) -> Override {
        let mut builder = OverrideBuilder::new(root);
        for pattern in &self.settings.files.ignore_patterns {
            if let Err(e) = builder.add(&format!("!{pattern}")) {
                warn!("Skipping invalid ignore pattern '{pattern}': {e}");
            }
        }
        builder.build().unwrap_or_else(|e| {
            warn!("Failed to build ignore patterns: {e}");
            Override::empty()
        })
    }

    /// Count files that would be linted
    pub fn count_files(&self, root: &Path) -> usize {
        self.walk(root).count()
    }
}
