//! Group resolution: configured `{ regex, label }` pairs to ordered rules

use crate::config::{CatchAllConfig, CatchAllPosition, GroupConfig};
use crate::error::{LintError, LintResult};
use regex::Regex;
use std::fmt;

/// Tests a module path against a group's pattern
pub trait PathMatcher: fmt::Debug + Send + Sync {
    fn matches(&self, path: &str) -> bool;

    /// Human readable form of the pattern
    fn describe(&self) -> &str;
}

/// Pattern backed by the `regex` crate. Unanchored: a match anywhere in the path counts.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> LintResult<Self> {
        Regex::new(pattern)
            .map(|regex| Self { regex })
            .map_err(|e| LintError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }
}

impl PathMatcher for RegexMatcher {
    fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    fn describe(&self) -> &str {
        self.regex.as_str()
    }
}

/// One ordered grouping rule
#[derive(Debug)]
pub struct GroupRule {
    pub label: String,
    pattern: Box<dyn PathMatcher>,
}

impl GroupRule {
    pub fn new(pattern: impl PathMatcher + 'static, label: impl Into<String>) -> LintResult<Self> {
        let label = label.into();
        validate_label(&label)?;
        Ok(Self {
            label,
            pattern: Box::new(pattern),
        })
    }

    pub fn from_config(config: &GroupConfig) -> LintResult<Self> {
        Self::new(RegexMatcher::new(&config.regex)?, config.label.clone())
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.describe()
    }
}

/// The fallback group for imports no rule matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchAll {
    pub label: String,
    pub position: CatchAllPosition,
}

impl CatchAll {
    pub fn from_config(config: &CatchAllConfig) -> LintResult<Self> {
        validate_label(&config.label)?;
        Ok(Self {
            label: config.label.clone(),
            position: config.position,
        })
    }
}

impl Default for CatchAll {
    fn default() -> Self {
        Self {
            label: "// etc".to_string(),
            position: CatchAllPosition::Last,
        }
    }
}

/// Labels are single-line `//` comments
fn validate_label(label: &str) -> LintResult<()> {
    if label.starts_with("//") && !label.contains(['\n', '\r']) {
        Ok(())
    } else {
        Err(LintError::InvalidLabel {
            label: label.to_string(),
        })
    }
}

/// Built-in groups used when no configuration is given
pub fn default_group_configs() -> Vec<GroupConfig> {
    [
        (r"^vue$", "// vue"),
        (r"(?:\btypes\b|\bcommon\b)$", "// types"),
        (r"\bconstants\b", "// constants"),
        (r"^@/[^/]+/(?:mock|selector)$", "// etc"),
        (r"^@/components(?:/[^/]+)*\.vue$", "// components"),
        (r"^@/views|.+\.vue$", "// views"),
        (r"^@/sections|.+\.vue$", "// sections"),
        (r"^@/use", "// use"),
        (r"^@/services", "// services"),
        (r"^@/utils", "// utils"),
    ]
    .into_iter()
    .map(|(regex, label)| GroupConfig::new(regex, label))
    .collect()
}

/// Resolve the rules for a run: the configured list verbatim when it is
/// present and non-empty, the built-in list otherwise.
pub fn resolve_groups(configured: Option<&[GroupConfig]>) -> LintResult<Vec<GroupRule>> {
    match configured {
        Some(groups) if !groups.is_empty() => groups.iter().map(GroupRule::from_config).collect(),
        _ => default_group_configs()
            .iter()
            .map(GroupRule::from_config)
            .collect(),
    }
}

/// Labels in the order groups are written out.
///
/// Rule order with repeated labels collapsed onto their first occurrence.
/// The catch-all keeps its place when a rule already uses its label and is
/// otherwise put first or last.
pub fn emission_order<'a>(rules: &'a [GroupRule], catch_all: &'a CatchAll) -> Vec<&'a str> {
    let mut order: Vec<&str> = Vec::with_capacity(rules.len() + 1);
    for rule in rules {
        if !order.contains(&rule.label.as_str()) {
            order.push(&rule.label);
        }
    }

    if !order.contains(&catch_all.label.as_str()) {
        match catch_all.position {
            CatchAllPosition::First => order.insert(0, &catch_all.label),
            CatchAllPosition::Last => order.push(&catch_all.label),
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(rules: &[GroupRule]) -> Vec<&str> {
        rules.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_defaults_when_unconfigured_or_empty() {
        let from_none = resolve_groups(None).unwrap();
        let from_empty = resolve_groups(Some(&[])).unwrap();

        assert_eq!(from_none.len(), 10);
        assert_eq!(labels(&from_none), labels(&from_empty));
        assert_eq!(from_none[0].label, "// vue");
        assert_eq!(from_none[9].label, "// utils");
    }

    #[test]
    fn test_configured_groups_are_used_verbatim() {
        let configured = vec![
            GroupConfig::new("^react", "// react"),
            GroupConfig::new("^@/", "// internal"),
        ];
        let rules = resolve_groups(Some(configured.as_slice())).unwrap();
        assert_eq!(labels(&rules), vec!["// react", "// internal"]);
        assert_eq!(rules[1].pattern(), "^@/");
    }

    #[test]
    fn test_default_patterns() {
        let rules = resolve_groups(None).unwrap();
        let first_match = |path: &str| {
            rules
                .iter()
                .find(|r| r.matches(path))
                .map(|r| r.label.as_str())
        };

        assert_eq!(first_match("vue"), Some("// vue"));
        assert_eq!(first_match("vue-router"), None);
        assert_eq!(first_match("@/api/types"), Some("// types"));
        assert_eq!(first_match("@/shared/common"), Some("// types"));
        assert_eq!(first_match("@/constants/routes"), Some("// constants"));
        assert_eq!(first_match("@/store/mock"), Some("// etc"));
        assert_eq!(first_match("@/components/base/Button.vue"), Some("// components"));
        assert_eq!(first_match("@/views/Home"), Some("// views"));
        assert_eq!(first_match("./Local.vue"), Some("// views"));
        assert_eq!(first_match("@/sections/Hero"), Some("// sections"));
        assert_eq!(first_match("@/use/useFetch"), Some("// use"));
        assert_eq!(first_match("@/services/api"), Some("// services"));
        assert_eq!(first_match("@/utils/x"), Some("// utils"));
        assert_eq!(first_match("random-pkg"), None);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let configured = vec![GroupConfig::new("^(unclosed", "// broken")];
        let err = resolve_groups(Some(configured.as_slice())).unwrap_err();
        assert!(matches!(err, LintError::InvalidPattern { ref pattern, .. } if pattern == "^(unclosed"));
    }

    #[test]
    fn test_labels_must_be_line_comments() {
        assert!(GroupRule::from_config(&GroupConfig::new("a", "vue")).is_err());
        assert!(GroupRule::from_config(&GroupConfig::new("a", "/* vue */")).is_err());
        assert!(GroupRule::from_config(&GroupConfig::new("a", "// a\n// b")).is_err());
        assert!(GroupRule::from_config(&GroupConfig::new("a", "//a")).is_ok());
    }

    #[test]
    fn test_emission_order_keeps_configured_catch_all_position() {
        let rules = resolve_groups(None).unwrap();
        let catch_all = CatchAll::default();
        let order = emission_order(&rules, &catch_all);

        // "// etc" is the fourth default rule, so it stays there
        assert_eq!(order.len(), 10);
        assert_eq!(order[3], "// etc");
        assert_eq!(order.last(), Some(&"// utils"));
    }

    #[test]
    fn test_emission_order_places_implicit_catch_all() {
        let configured = vec![
            GroupConfig::new("^react", "// react"),
            GroupConfig::new("^@/", "// internal"),
            GroupConfig::new("^~/", "// internal"),
        ];
        let rules = resolve_groups(Some(configured.as_slice())).unwrap();

        let last = CatchAll::default();
        assert_eq!(
            emission_order(&rules, &last),
            vec!["// react", "// internal", "// etc"]
        );

        let first = CatchAll {
            label: "// etc".to_string(),
            position: CatchAllPosition::First,
        };
        assert_eq!(
            emission_order(&rules, &first),
            vec!["// etc", "// react", "// internal"]
        );
    }
}
