//! Import grouping linter for JavaScript, TypeScript and Vue sources.
//!
//! Checks that the imports at the top of a file are clustered into labeled
//! groups, each introduced by its label comment, and rewrites the block when
//! they are not.

pub mod config;
pub mod display;
pub mod error;
pub mod fix;
pub mod io;
pub mod lint;
pub mod parsing;
pub mod rule;
pub mod types;

// Explicit exports for better API clarity
pub use config::{CatchAllPosition, GroupConfig, Settings};
pub use error::{LintError, LintResult, ParseError, ParseResult};
pub use fix::{Fix, TextEdit, apply_fix};
pub use lint::{FileReport, LintSummary, Linter};
pub use parsing::{Language, ParsedSource, SourceParser};
pub use rule::{Diagnostic, ImportGroupingRule};
pub use types::{ByteRange, Position, Span};
