pub mod import;
pub mod language;
pub mod parser;
pub mod vue;

pub use import::{Comment, CommentKind, ImportStatement};
pub use language::Language;
pub use parser::{ParsedSource, SourceParser};
