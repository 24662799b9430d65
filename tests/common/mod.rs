use import_grouping::{Diagnostic, Language, Linter, Settings, SourceParser, apply_fix};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Linter over the built-in groups
#[allow(dead_code)]
pub fn default_linter(fix: bool) -> Linter {
    Linter::new(Arc::new(Settings::default()))
        .expect("default groups are valid")
        .with_fix(fix)
}

/// Check `code` as a file of the given language with the default groups
#[allow(dead_code)]
pub fn check(code: &str, language: Language) -> Option<Diagnostic> {
    let rule = import_grouping::ImportGroupingRule::with_defaults().expect("default groups");
    let parsed = SourceParser::new()
        .parse(code, language)
        .expect("source parses");
    rule.check(&parsed)
}

/// Apply the fix of the diagnostic raised for `code`
#[allow(dead_code)]
pub fn fix(code: &str, language: Language) -> String {
    let diagnostic = check(code, language).expect("expected a diagnostic");
    let fix = diagnostic.fix.expect("expected a fix");
    apply_fix(code, &fix).expect("fix applies")
}
