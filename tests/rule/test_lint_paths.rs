//! Linting whole trees from disk, with and without fixing

use crate::common::{TestProject, default_linter};
use import_grouping::io::ExitCode;
use std::path::PathBuf;

const VALID: &str = "// vue\nimport {ref} from 'vue';\n\nexport const a = ref(1);\n";
const INVALID: &str = "import a from '@/utils/a';\nimport {ref} from 'vue';\n";

fn project() -> TestProject {
    let project = TestProject::new();
    project.add_file("src/valid.ts", VALID);
    project.add_file("src/invalid.js", INVALID);
    project.add_file("src/Card.vue", "<template><div /></template>\n");
    project.add_file("node_modules/pkg/index.js", INVALID);
    project.add_file("README.md", "import a from 'a';\n");
    project
}

#[test]
fn test_check_reports_without_writing() {
    let project = project();
    let summary = default_linter(false).lint_paths(&[project.path().to_path_buf()]);

    assert_eq!(summary.files_checked, 3);
    assert_eq!(summary.violation_count(), 1);
    assert_eq!(summary.remaining_count(), 1);
    assert!(summary.reports[0].path.ends_with("src/invalid.js"));
    assert_eq!(ExitCode::from_summary(&summary), ExitCode::Violations);

    assert_eq!(project.read("src/invalid.js"), INVALID);
}

#[test]
fn test_fix_rewrites_files_in_place() {
    let project = project();
    let summary = default_linter(true).lint_paths(&[project.path().to_path_buf()]);

    assert_eq!(summary.fixed_count(), 1);
    assert_eq!(summary.remaining_count(), 0);
    assert!(ExitCode::from_summary(&summary).is_success());

    assert_eq!(
        project.read("src/invalid.js"),
        "// vue\nimport {ref} from 'vue';\n\n// utils\nimport a from '@/utils/a';\n\n"
    );
    assert_eq!(project.read("src/valid.ts"), VALID);
    assert_eq!(project.read("node_modules/pkg/index.js"), INVALID);

    let again = default_linter(false).lint_paths(&[project.path().to_path_buf()]);
    assert_eq!(again.violation_count(), 0);
}

#[test]
fn test_missing_and_unsupported_files_are_collected_as_errors() {
    let project = project();
    let paths = vec![
        project.path().join("src/invalid.js"),
        project.path().join("README.md"),
        PathBuf::from("does/not/exist.js"),
    ];

    let summary = default_linter(false).lint_paths(&paths);

    assert_eq!(summary.files_checked, 3);
    assert_eq!(summary.violation_count(), 1);
    assert_eq!(summary.errors.len(), 2);

    let mut codes: Vec<&str> = summary.errors.iter().map(|e| e.code.as_str()).collect();
    codes.sort();
    assert_eq!(codes, vec!["FILE_READ_ERROR", "UNSUPPORTED_FILE_TYPE"]);

    // Remaining violations decide the exit code before file errors
    assert_eq!(ExitCode::from_summary(&summary), ExitCode::Violations);
}

#[test]
fn test_rewrite_that_fails_the_check_is_not_written() {
    // The label would be appended to the hashbang line
    const SCRIPT: &str = "#!/usr/bin/env node\nimport {watch} from 'vue';\n";
    let project = TestProject::new();
    project.add_file("bin/cli.js", SCRIPT);

    let summary = default_linter(true).lint_paths(&[project.path().to_path_buf()]);

    assert_eq!(summary.violation_count(), 1);
    assert_eq!(summary.fixed_count(), 0);
    assert_eq!(ExitCode::from_summary(&summary), ExitCode::Violations);
    assert_eq!(project.read("bin/cli.js"), SCRIPT);
}
