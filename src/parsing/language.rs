//! Language detection and enumeration
//!
//! This module provides language detection from file extensions
//! and the tree-sitter grammar behind each language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported source languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Tsx,
    /// Vue single-file component; only its `<script>` blocks are parsed
    Vue,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "vue" => Some(Language::Vue),
            _ => None,
        }
    }

    /// Detect language from a file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Pick the script language named by a Vue `<script lang="...">` attribute
    pub fn from_script_lang(lang: Option<&str>) -> Self {
        match lang.map(|l| l.to_lowercase()).as_deref() {
            Some("ts") | Some("typescript") => Language::TypeScript,
            Some("tsx") => Language::Tsx,
            _ => Language::JavaScript,
        }
    }

    /// File extensions handled by this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &["js", "mjs", "cjs", "jsx"],
            Language::TypeScript => &["ts", "mts", "cts"],
            Language::Tsx => &["tsx"],
            Language::Vue => &["vue"],
        }
    }

    /// Tree-sitter grammar for this language.
    ///
    /// Vue has no grammar of its own; script blocks are parsed with the
    /// grammar chosen by [`Language::from_script_lang`].
    pub fn grammar(&self) -> Option<tree_sitter::Language> {
        match self {
            // The JavaScript grammar covers JSX as well
            Language::JavaScript => Some(tree_sitter_javascript::LANGUAGE.into()),
            Language::TypeScript => Some(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            Language::Tsx => Some(tree_sitter_typescript::LANGUAGE_TSX.into()),
            Language::Vue => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "TSX",
            Language::Vue => "Vue",
        }
    }

    /// All languages, used for default extension lists
    pub fn all() -> [Language; 4] {
        [
            Language::JavaScript,
            Language::TypeScript,
            Language::Tsx,
            Language::Vue,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
