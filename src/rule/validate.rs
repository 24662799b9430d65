//! Checks whether the imports already sit under their label comments

use super::CommentLookup;
use super::classify::GroupedImports;
use crate::parsing::{Comment, CommentKind};
use tracing::debug;

/// Label text without its leading `//`
pub fn strip_marker(label: &str) -> &str {
    label.strip_prefix("//").unwrap_or(label)
}

/// Whether `comment` spells out `label`. Only line comments qualify and the
/// text after `//` must match exactly, spacing included.
pub fn label_matches(label: &str, comment: &Comment) -> bool {
    comment.kind == CommentKind::Line && comment.value == strip_marker(label)
}

/// True when every non-empty group's first import is preceded by exactly
/// one comment, and that comment is the group's label.
///
/// Stops at the first group that fails. Blank lines between groups, group
/// order and stray comments elsewhere are not checked here.
pub fn is_valid<C: CommentLookup + ?Sized>(grouped: &GroupedImports<'_>, comments: &C) -> bool {
    grouped
        .iter()
        .filter_map(|group| group.first().map(|first| (group, first)))
        .all(|(group, first)| match comments.comments_before(first) {
            [only] if label_matches(&group.label, only) => true,
            preceding => {
                debug!(
                    "group '{}' starting at '{}' has {} preceding comment(s) without its label",
                    group.label,
                    first.source,
                    preceding.len()
                );
                false
            }
        })
}
