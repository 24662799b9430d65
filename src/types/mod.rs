use serde::{Deserialize, Serialize};
use std::ops::Range as StdRange;

/// Half-open byte range `[start, end)` into a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "byte range start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Shift both ends forward, used when a parsed fragment sits inside a larger file.
    pub fn offset(self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    pub fn overlaps(&self, other: &ByteRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn as_std(&self) -> StdRange<usize> {
        self.start..self.end
    }
}

impl From<StdRange<usize>> for ByteRange {
    fn from(range: StdRange<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Line/column position. Lines are 1-based, columns are 0-based byte offsets
/// within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Maps byte offsets of a text to line/column positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    pub fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        Position {
            line: line as u32 + 1,
            column: (offset - self.line_starts[line]) as u32,
        }
    }

    pub fn span(&self, range: ByteRange) -> Span {
        Span {
            start: self.position(range.start),
            end: self.position(range.end),
        }
    }
}
