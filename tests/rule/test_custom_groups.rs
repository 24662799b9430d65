//! Configured groups replacing the built-in list

use import_grouping::config::parse_group_options;
use import_grouping::{
    CatchAllPosition, ImportGroupingRule, Language, LintError, Settings, SourceParser, apply_fix,
};

const OPTIONS: &str = r#"[
    // framework first
    { "regex": "^react", "label": "// react" },
    { "regex": "^@mui/", "label": "// ui" },
    { "regex": "^\\./", "label": "// local" },
]"#;

fn rule_with(options: &str, position: CatchAllPosition) -> ImportGroupingRule {
    let mut settings = Settings::default();
    settings.groups = Some(parse_group_options(options).unwrap());
    settings.catch_all.position = position;
    ImportGroupingRule::from_settings(&settings).unwrap()
}

fn fixed(rule: &ImportGroupingRule, code: &str) -> String {
    let parsed = SourceParser::new().parse(code, Language::Tsx).unwrap();
    let diagnostic = rule.check(&parsed).expect("expected a diagnostic");
    apply_fix(code, diagnostic.fix.as_ref().unwrap()).unwrap()
}

#[test]
fn test_configured_groups_replace_defaults() {
    let rule = rule_with(OPTIONS, CatchAllPosition::Last);
    assert_eq!(
        rule.order(),
        vec!["// react", "// ui", "// local", "// etc"]
    );

    let code = "import './App.css';\nimport Button from '@mui/material/Button';\nimport {ref} from 'vue';\nimport React from 'react';\n";
    assert_eq!(
        fixed(&rule, code),
        "// react\nimport React from 'react';\n\n// ui\nimport Button from '@mui/material/Button';\n\n// local\nimport './App.css';\n\n// etc\nimport {ref} from 'vue';\n\n"
    );
}

#[test]
fn test_catch_all_can_lead() {
    let rule = rule_with(OPTIONS, CatchAllPosition::First);
    assert_eq!(rule.order()[0], "// etc");

    let code = "import React from 'react';\nimport dayjs from 'dayjs';";
    assert_eq!(
        fixed(&rule, code),
        "// etc\nimport dayjs from 'dayjs';\n\n// react\nimport React from 'react';\n"
    );
}

#[test]
fn test_configured_catch_all_label_keeps_its_slot() {
    let options = r#"[
        { "regex": "^react", "label": "// react" },
        { "regex": "^lodash", "label": "// etc" },
        { "regex": "^\\./", "label": "// local" }
    ]"#;
    let rule = rule_with(options, CatchAllPosition::First);
    assert_eq!(rule.order(), vec!["// react", "// etc", "// local"]);
}

#[test]
fn test_empty_list_selects_defaults() {
    let rule = rule_with("[]", CatchAllPosition::Last);
    assert_eq!(rule.rules().len(), 10);
    assert_eq!(rule.order()[0], "// vue");
}

#[test]
fn test_options_schema_is_strict() {
    let err = parse_group_options(r#"[{ "regex": "^a", "label": "// a", "extra": 1 }]"#)
        .unwrap_err();
    assert!(matches!(err, LintError::ConfigError { .. }));

    assert!(parse_group_options(r#"[{ "regex": "^a" }]"#).is_err());
    assert!(parse_group_options(r#"{ "regex": "^a", "label": "// a" }"#).is_err());
}

#[test]
fn test_invalid_pattern_is_rejected_before_checking() {
    let mut settings = Settings::default();
    settings.groups = Some(parse_group_options(r#"[{ "regex": "(?<=a)b", "label": "// a" }]"#).unwrap());

    let err = ImportGroupingRule::from_settings(&settings).unwrap_err();
    assert_eq!(err.status_code(), "INVALID_PATTERN");
    assert!(err.is_blocking());
}

#[test]
fn test_label_must_be_a_line_comment() {
    let mut settings = Settings::default();
    settings.groups = Some(parse_group_options(r#"[{ "regex": "^a", "label": "utils" }]"#).unwrap());

    let err = ImportGroupingRule::from_settings(&settings).unwrap_err();
    assert!(matches!(err, LintError::InvalidLabel { ref label } if label == "utils"));
}
