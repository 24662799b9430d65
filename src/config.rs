//! Configuration module for the import grouping linter.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `IG_` and use double underscores
//! to separate nested levels:
//! - `IG_DEBUG=true` sets `debug`
//! - `IG_CATCH_ALL__POSITION=first` sets `catch_all.position`
//! - `IG_CATCH_ALL__LABEL="// other"` sets `catch_all.label`

use crate::error::{ErrorContext, LintError, LintResult};
use crate::parsing::Language;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the settings file, searched for from the current directory upward
pub const CONFIG_DIR: &str = ".import-grouping";
pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Workspace root directory (where .import-grouping is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Ordered group rules; `None` or empty selects the built-in defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupConfig>>,

    /// Where imports that match no group end up
    #[serde(default)]
    pub catch_all: CatchAllConfig,

    /// File discovery settings
    #[serde(default)]
    pub files: FilesConfig,
}

/// One `{ regex, label }` entry of the rule options.
///
/// Mirrors the rule's JSON schema: both fields are required and no other
/// fields are accepted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Regular expression tested against the import's module path
    pub regex: String,
    /// Label comment written above the group, e.g. `// utils`
    pub label: String,
}

impl GroupConfig {
    pub fn new(regex: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            regex: regex.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatchAllPosition {
    First,
    #[default]
    Last,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatchAllConfig {
    /// Label of the fallback group
    #[serde(default = "default_catch_all_label")]
    pub label: String,

    /// Position of the fallback group when no configured group uses its label
    #[serde(default)]
    pub position: CatchAllPosition,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilesConfig {
    /// File extensions to lint when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns to skip when walking directories
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_catch_all_label() -> String {
    "// etc".to_string()
}
fn default_extensions() -> Vec<String> {
    Language::all()
        .iter()
        .flat_map(|lang| lang.extensions())
        .map(|ext| ext.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            workspace_root: None,
            groups: None,
            catch_all: CatchAllConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Default for CatchAllConfig {
    fn default() -> Self {
        Self {
            label: default_catch_all_label(),
            position: CatchAllPosition::Last,
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_patterns: vec![
                "node_modules/**".to_string(),
                "dist/**".to_string(),
                ".git/**".to_string(),
                "*.min.js".to_string(),
            ],
        }
    }
}

/// Environment provider: `IG_CATCH_ALL__POSITION` becomes `catch_all.position`
fn env_provider() -> Env {
    Env::prefixed("IG_").map(|key| {
        key.as_str()
            .to_lowercase()
            .replace("__", ".") // Double underscore becomes dot
            .into()
    })
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(env_provider())
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(env_provider())
            .extract()
            .map_err(Box::new)
    }

    /// Find the settings file by looking for a .import-grouping directory
    /// from the current directory up to the root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .import-grouping is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> LintResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }

        let toml_string = toml::to_string_pretty(self).context("Serializing settings")?;
        std::fs::write(path, toml_string).map_err(|source| LintError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> LintResult<PathBuf> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(LintError::ConfigError {
                reason: "Configuration file already exists. Use --force to overwrite".to_string(),
            });
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_path(parent)?;
        }

        let template = r#"# import-grouping configuration
#
# Imports at the top of each file are clustered into groups, each preceded
# by its label comment, in the order the groups are listed here. The first
# group whose regex matches an import's module path wins.

# Version of the configuration schema
version = 1

# Global debug mode
debug = false

# Uncomment to replace the built-in groups. Patterns use Rust regex syntax.
# Labels must be single-line comments.
#
# [[groups]]
# regex = "^vue$"
# label = "// vue"
#
# [[groups]]
# regex = "^@/utils"
# label = "// utils"

[catch_all]
# Label of the group for imports that match no pattern
label = "// etc"

# Where the catch-all group goes when no configured group uses its label:
# "first" or "last"
position = "last"

[files]
# Extensions checked when walking directories
extensions = ["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx", "vue"]

# Glob patterns skipped when walking directories
ignore_patterns = ["node_modules/**", "dist/**", ".git/**", "*.min.js"]
"#;

        std::fs::write(&config_path, template).map_err(|source| LintError::FileWrite {
            path: config_path.clone(),
            source,
        })?;

        Ok(config_path)
    }
}

/// Read rule options in their JSON form: `[{ "regex": "...", "label": "..." }]`.
///
/// Comments and trailing commas are accepted.
pub fn load_group_options(path: &Path) -> LintResult<Vec<GroupConfig>> {
    let content = std::fs::read_to_string(path).map_err(|source| LintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_group_options(&content)
}

pub fn parse_group_options(content: &str) -> LintResult<Vec<GroupConfig>> {
    json5::from_str(content).map_err(|e| LintError::ConfigError {
        reason: format!(
            "Failed to parse group options: {e}\nSuggestion: expected an array of {{ \"regex\": string, \"label\": string }} objects"
        ),
    })
}
