//! Script block extraction for Vue single-file components

use super::Language;
use crate::types::ByteRange;
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").expect("script block regex is valid")
});

static LANG_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\blang\s*=\s*["']?([a-z]+)"#).expect("lang attribute regex is valid")
});

/// The content of one `<script>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock {
    /// Range of the script content (between the tags) within the `.vue` file
    pub range: ByteRange,
    /// Grammar selected by the `lang` attribute
    pub language: Language,
}

/// Find every `<script>` block in a Vue file, in document order
pub fn script_blocks(text: &str) -> Vec<ScriptBlock> {
    SCRIPT_BLOCK
        .captures_iter(text)
        .filter_map(|caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            let content = caps.get(2)?;
            let lang = LANG_ATTR
                .captures(attrs)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str());
            Some(ScriptBlock {
                range: ByteRange::new(content.start(), content.end()),
                language: Language::from_script_lang(lang),
            })
        })
        .collect()
}
