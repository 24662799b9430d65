//! The import grouping rule
//!
//! Imports at the top of a file are clustered into labeled groups, each
//! introduced by its label comment, in a fixed order. The rule runs four
//! stages per file:
//! - [`group`] resolves the ordered `(pattern, label)` rules
//! - [`classify`] assigns every import to exactly one group
//! - [`validate`] checks the label comment in front of each group
//! - [`rewrite`] regenerates the block when validation fails
//!
//! The rule reads the file through [`TextSource`] and [`CommentLookup`], so
//! any parser that can provide imports, text and preceding comments can
//! drive it.

pub mod classify;
pub mod group;
pub mod rewrite;
pub mod validate;

pub use classify::{Group, GroupedImports, classify};
pub use group::{CatchAll, GroupRule, PathMatcher, RegexMatcher, emission_order, resolve_groups};

use crate::config::Settings;
use crate::error::LintResult;
use crate::fix::Fix;
use crate::parsing::{Comment, ImportStatement};
use crate::types::{ByteRange, Span};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const RULE_NAME: &str = "import-grouping";
pub const MESSAGE_ID: &str = "importGroupingError";
pub const MESSAGE: &str =
    "Group imports from the same unit together and separate groups by a blank line";

/// Raw text access
pub trait TextSource {
    fn text(&self) -> &str;

    fn slice(&self, range: ByteRange) -> &str {
        &self.text()[range.as_std()]
    }
}

/// Comments sitting directly in front of an import, nearest last
pub trait CommentLookup {
    fn comments_before(&self, import: &ImportStatement) -> &[Comment];
}

/// A file the rule can check
pub trait ImportSource: TextSource + CommentLookup {
    /// Top-level imports in source order
    fn imports(&self) -> &[ImportStatement];
}

/// A grouping violation spanning the whole import block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub rule: String,
    pub message_id: String,
    pub message: String,
    pub range: ByteRange,
    pub loc: Span,
    /// `None` when the block cannot be rewritten safely
    pub fix: Option<Fix>,
}

#[derive(Debug)]
pub struct ImportGroupingRule {
    rules: Vec<GroupRule>,
    catch_all: CatchAll,
}

impl ImportGroupingRule {
    pub fn new(rules: Vec<GroupRule>, catch_all: CatchAll) -> Self {
        Self { rules, catch_all }
    }

    /// Rule with the built-in groups and an `// etc` catch-all placed last
    pub fn with_defaults() -> LintResult<Self> {
        Ok(Self::new(resolve_groups(None)?, CatchAll::default()))
    }

    pub fn from_settings(settings: &Settings) -> LintResult<Self> {
        let rules = resolve_groups(settings.groups.as_deref())?;
        let catch_all = CatchAll::from_config(&settings.catch_all)?;
        debug!(
            "Resolved {} group rule(s); catch-all '{}'",
            rules.len(),
            catch_all.label
        );
        Ok(Self::new(rules, catch_all))
    }

    pub fn rules(&self) -> &[GroupRule] {
        &self.rules
    }

    pub fn catch_all(&self) -> &CatchAll {
        &self.catch_all
    }

    /// Labels in the order groups are written
    pub fn order(&self) -> Vec<&str> {
        emission_order(&self.rules, &self.catch_all)
    }

    /// Check one file. Returns a diagnostic with a fix when the imports are
    /// not grouped under their labels, `None` otherwise.
    pub fn check<S: ImportSource + ?Sized>(&self, source: &S) -> Option<Diagnostic> {
        let imports = source.imports();
        let (first, last) = (imports.first()?, imports.last()?);

        let grouped = classify(imports, &self.rules, &self.catch_all);
        if validate::is_valid(&grouped, source) {
            return None;
        }

        let fix = if rewrite::is_contiguous(imports, source) {
            let text = rewrite::grouped_text(&grouped, &self.order(), source);
            Some(rewrite::block_fix(imports, source, text))
        } else {
            warn!(
                "Imports between lines {} and {} are interleaved with other code; not rewriting",
                first.loc.start.line, last.loc.end.line
            );
            None
        };

        Some(Diagnostic {
            rule: RULE_NAME.to_string(),
            message_id: MESSAGE_ID.to_string(),
            message: MESSAGE.to_string(),
            range: ByteRange::new(first.range.start, last.range.end),
            loc: Span {
                start: first.loc.start,
                end: last.loc.end,
            },
            fix,
        })
    }
}
