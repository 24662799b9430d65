//! Text edits and their atomic application

use crate::error::{LintError, LintResult};
use crate::types::ByteRange;
use serde::{Deserialize, Serialize};

/// Replace `range` with `replacement`. An empty replacement removes the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: ByteRange,
    pub replacement: String,
}

impl TextEdit {
    pub fn remove(range: ByteRange) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }

    pub fn replace(range: ByteRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// A set of edits applied together or not at all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub edits: Vec<TextEdit>,
}

impl Fix {
    pub fn new(edits: Vec<TextEdit>) -> Self {
        Self { edits }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Apply every edit of `fix` to `text` and return the new text.
///
/// Edits may be given in any order. Overlapping edits, ranges past the end
/// of the text and ranges that split a UTF-8 character are rejected and
/// leave nothing applied.
pub fn apply_fix(text: &str, fix: &Fix) -> LintResult<String> {
    let mut edits: Vec<&TextEdit> = fix.edits.iter().collect();
    edits.sort_by_key(|e| (e.range.start, e.range.end));

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut previous: Option<ByteRange> = None;

    for edit in edits {
        let ByteRange { start, end } = edit.range;
        let invalid = |reason: &str| LintError::InvalidEdit {
            start,
            end,
            reason: reason.to_string(),
        };

        if previous.is_some_and(|prev| prev.overlaps(&edit.range)) {
            return Err(invalid("overlaps a previous edit"));
        }
        if end > text.len() || start > end {
            return Err(invalid("range is outside the source text"));
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Err(invalid("range splits a UTF-8 character"));
        }

        output.push_str(&text[cursor..start]);
        output.push_str(&edit.replacement);
        cursor = end;
        previous = Some(edit.range);
    }

    output.push_str(&text[cursor..]);
    Ok(output)
}
