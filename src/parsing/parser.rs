//! Tree-sitter parsing of JavaScript, TypeScript and Vue sources
//!
//! Only the top level of a program matters to the grouping rule, so the
//! parser walks the root's direct children once and records:
//! - every `import_statement`, with its module path and position
//! - every comment
//! - for each import, the run of comments sitting directly in front of it

use super::import::{Comment, ImportStatement};
use super::{Language, vue};
use crate::error::{ParseError, ParseResult};
use crate::rule::{CommentLookup, ImportSource, TextSource};
use crate::types::{ByteRange, LineIndex};
use std::collections::HashMap;
use std::ops::Range;
use tracing::{debug, trace};
use tree_sitter::{Node, Parser};

/// Reusable parser holding one tree-sitter parser per grammar.
///
/// Not `Sync`; create one per thread.
#[derive(Default)]
pub struct SourceParser {
    parsers: HashMap<Language, Parser>,
}

impl SourceParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole file written in `language`
    pub fn parse(&mut self, text: &str, language: Language) -> ParseResult<ParsedSource> {
        let mut collected = Collected::default();

        if language == Language::Vue {
            let blocks = vue::script_blocks(text);
            debug!("Found {} script block(s) in Vue file", blocks.len());
            for block in blocks {
                self.collect_fragment(text, block.range, block.language, &mut collected)?;
            }
        } else {
            let whole = ByteRange::new(0, text.len());
            self.collect_fragment(text, whole, language, &mut collected)?;
        }

        Ok(ParsedSource {
            text: text.to_string(),
            language,
            imports: collected.imports,
            comments: collected.comments,
            leading: collected.leading,
        })
    }

    fn parser_for(&mut self, language: Language) -> ParseResult<&mut Parser> {
        if !self.parsers.contains_key(&language) {
            let grammar = language.grammar().ok_or_else(|| ParseError::ParserInit {
                language: language.name().to_string(),
                reason: "no tree-sitter grammar for this language".to_string(),
            })?;
            let mut parser = Parser::new();
            parser
                .set_language(&grammar)
                .map_err(|e| ParseError::ParserInit {
                    language: language.name().to_string(),
                    reason: e.to_string(),
                })?;
            self.parsers.insert(language, parser);
        }
        self.parsers
            .get_mut(&language)
            .ok_or_else(|| ParseError::ParserInit {
                language: language.name().to_string(),
                reason: "parser cache miss".to_string(),
            })
    }

    /// Parse `text[fragment]` and append its top-level imports and comments,
    /// with ranges relative to the full `text`.
    fn collect_fragment(
        &mut self,
        text: &str,
        fragment: ByteRange,
        language: Language,
        out: &mut Collected,
    ) -> ParseResult<()> {
        let code = text
            .get(fragment.as_std())
            .ok_or(ParseError::InvalidUtf8)?;
        let tree = self
            .parser_for(language)?
            .parse(code, None)
            .ok_or(ParseError::TreeUnavailable)?;

        let root = tree.root_node();
        if root.has_error() {
            debug!("{language} source contains syntax errors; continuing with partial tree");
        }

        let lines = LineIndex::new(text);
        let base = fragment.start;
        // Comments seen since the last non-comment node
        let mut run_start = out.comments.len();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            let range = ByteRange::from(child.byte_range()).offset(base);
            match child.kind() {
                "comment" => {
                    if let Some(comment) = Comment::from_raw(&code[child.byte_range()], range) {
                        out.comments.push(comment);
                    }
                }
                "import_statement" => {
                    if let Some(source) = import_source(child, code) {
                        trace!("import '{source}' at {}..{}", range.start, range.end);
                        out.imports.push(ImportStatement {
                            source,
                            range,
                            loc: lines.span(range),
                        });
                        out.leading.push(run_start..out.comments.len());
                    }
                    run_start = out.comments.len();
                }
                _ => run_start = out.comments.len(),
            }
        }

        Ok(())
    }
}

/// Module path of an import statement, with quotes stripped
fn import_source(node: Node, code: &str) -> Option<String> {
    let source_node = node.child_by_field_name("source")?;
    let raw = &code[source_node.byte_range()];
    Some(
        raw.trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .to_string(),
    )
}

#[derive(Default)]
struct Collected {
    imports: Vec<ImportStatement>,
    comments: Vec<Comment>,
    leading: Vec<Range<usize>>,
}

/// A parsed file: its text plus the top-level imports and comments
#[derive(Debug, Clone)]
pub struct ParsedSource {
    text: String,
    language: Language,
    imports: Vec<ImportStatement>,
    comments: Vec<Comment>,
    /// For each import, the indices into `comments` that directly precede it
    leading: Vec<Range<usize>>,
}

impl ParsedSource {
    pub fn language(&self) -> Language {
        self.language
    }

}

impl TextSource for ParsedSource {
    fn text(&self) -> &str {
        &self.text
    }
}

impl CommentLookup for ParsedSource {
    fn comments_before(&self, import: &ImportStatement) -> &[Comment] {
        match self
            .imports
            .binary_search_by_key(&import.range.start, |i| i.range.start)
        {
            Ok(index) => &self.comments[self.leading[index].clone()],
            Err(_) => &[],
        }
    }
}

impl ImportSource for ParsedSource {
    fn imports(&self) -> &[ImportStatement] {
        &self.imports
    }
}
