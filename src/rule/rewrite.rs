//! Regeneration of the import block and the edits that install it

use super::classify::GroupedImports;
use super::{CommentLookup, TextSource};
use crate::fix::{Fix, TextEdit};
use crate::parsing::ImportStatement;
use crate::types::ByteRange;
use std::collections::HashSet;

/// Canonical text of the import block.
///
/// Groups are written in `order`; each non-empty group is its label line
/// followed by its statements, one per line. A blank line separates
/// groups. Empty groups write nothing.
pub fn grouped_text<T: TextSource + ?Sized>(
    grouped: &GroupedImports<'_>,
    order: &[&str],
    source: &T,
) -> String {
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut text = String::new();

    for &label in order {
        let Some(group) = grouped.get(label).filter(|g| !g.is_empty()) else {
            continue;
        };

        if emitted.insert(label) {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(label);
            text.push('\n');
        }

        let statements: Vec<&str> = group
            .imports
            .iter()
            .map(|import| source.slice(import.range))
            .collect();
        text.push_str(&statements.join("\n"));
        text.push('\n');
    }

    text
}

/// Edits that replace the import block with `replacement`.
///
/// Removes every comment directly before the first import and, when the
/// character just before the first import is whitespace, that character.
/// Everything from the first import's start to the last import's end is
/// replaced.
///
/// That one whitespace character is removed wherever it sits. In a Vue file
/// whose imports start on the line after `<script>`, the first label
/// therefore lands on the tag's line (`<script setup>// vue`). This is
/// intended: the script block still starts with the label comment and the
/// result passes the check. After a hashbang the label would join the
/// `#!` line instead, so `Linter` re-checks every rewrite before writing it.
pub fn block_fix<S>(imports: &[ImportStatement], source: &S, replacement: String) -> Fix
where
    S: TextSource + CommentLookup + ?Sized,
{
    let (Some(first), Some(last)) = (imports.first(), imports.last()) else {
        return Fix::default();
    };

    let mut edits: Vec<TextEdit> = source
        .comments_before(first)
        .iter()
        .map(|comment| TextEdit::remove(comment.range))
        .collect();

    let start = first.range.start;
    if let Some(prev) = source.text()[..start].chars().next_back() {
        if prev.is_whitespace() {
            edits.push(TextEdit::remove(ByteRange::new(start - prev.len_utf8(), start)));
        }
    }

    edits.push(TextEdit::replace(
        ByteRange::new(start, last.range.end),
        replacement,
    ));
    Fix::new(edits)
}

/// Whether the imports form one block, with only whitespace and comments
/// between consecutive statements.
///
/// Replacing a block that has other code inside it would delete that code.
pub fn is_contiguous<S>(imports: &[ImportStatement], source: &S) -> bool
where
    S: TextSource + CommentLookup + ?Sized,
{
    imports.windows(2).all(|pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        let mut cursor = prev.range.end;

        for comment in source.comments_before(next) {
            if comment.range.start < cursor {
                continue;
            }
            if !source.slice(ByteRange::new(cursor, comment.range.start)).trim().is_empty() {
                return false;
            }
            cursor = comment.range.end;
        }

        source
            .slice(ByteRange::new(cursor, next.range.start))
            .trim()
            .is_empty()
    })
}
