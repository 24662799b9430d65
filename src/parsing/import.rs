//! Import statement and comment representation
//!
//! These are the read-only views the grouping rule receives from the
//! parser: where each top-level import sits and which module it names,
//! and the comments found in the file.

use crate::types::{ByteRange, Span};
use serde::{Deserialize, Serialize};

/// A top-level `import` declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatement {
    /// The module path being imported, without quotes (e.g. "@/utils/date")
    pub source: String,
    /// Byte range of the whole statement, including a trailing semicolon
    pub range: ByteRange,
    /// Line/column span of the statement
    pub loc: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
}

/// A comment token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: CommentKind,
    /// Comment text without its markers: `// vue` has the value `" vue"`
    pub value: String,
    /// Byte range of the comment including its markers
    pub range: ByteRange,
}

impl Comment {
    /// Build a comment from its raw source text.
    ///
    /// Returns `None` if the text does not start with a comment marker.
    pub fn from_raw(raw: &str, range: ByteRange) -> Option<Self> {
        if let Some(value) = raw.strip_prefix("//") {
            return Some(Self {
                kind: CommentKind::Line,
                value: value.to_string(),
                range,
            });
        }
        let body = raw.strip_prefix("/*")?;
        let value = body.strip_suffix("*/").unwrap_or(body);
        Some(Self {
            kind: CommentKind::Block,
            value: value.to_string(),
            range,
        })
    }
}
