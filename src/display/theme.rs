//! Styling for lint reports and group listings.
//!
//! Colors are decided once, when the theme is built: they are off when
//! `NO_COLOR` is set or stdout is not a terminal. Every helper returns a
//! finished line so `OutputManager` only decides where it goes.

use crate::rule::Diagnostic;
use console::Style;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;
use std::sync::LazyLock;

/// Theme for the current process
pub static THEME: LazyLock<Theme> = LazyLock::new(Theme::detect);

/// Column width of group labels in `groups` output
const LABEL_WIDTH: usize = 16;

#[derive(Debug, Clone)]
pub struct Theme {
    colors: bool,
    path: Style,
    position: Style,
    error: Style,
    fixed: Style,
    rule: Style,
    label: Style,
    pattern: Style,
    heading: Style,
}

impl Theme {
    /// Colored when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect() -> Self {
        let colors = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Self::new(colors)
    }

    pub fn new(colors: bool) -> Self {
        Self {
            colors,
            path: Style::new().underlined(),
            position: Style::new().dim(),
            error: Style::new().red().bright(),
            fixed: Style::new().green(),
            rule: Style::new().dim(),
            label: Style::new().green(),
            pattern: Style::new().yellow(),
            heading: Style::new().cyan().bold(),
        }
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    fn paint<T: Display>(&self, style: &Style, text: T) -> String {
        if self.colors {
            style.apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// First line of a file's block in the report
    pub fn file_header(&self, path: &Path) -> String {
        self.paint(&self.path, path.display())
    }

    /// `  line:col  severity  message  rule`, with a 1-based column.
    ///
    /// Severity reads `fixed` once the file has been rewritten.
    pub fn diagnostic(&self, diagnostic: &Diagnostic, fixed: bool) -> String {
        let start = diagnostic.loc.start;
        let position = format!("{}:{}", start.line, start.column + 1);
        let severity = if fixed {
            self.paint(&self.fixed, "fixed")
        } else {
            self.paint(&self.error, "error")
        };
        format!(
            "  {}  {severity}  {}  {}",
            self.paint(&self.position, position),
            diagnostic.message,
            self.paint(&self.rule, &diagnostic.rule)
        )
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(&self.heading, text)
    }

    /// One numbered row of the group order. `None` marks the catch-all.
    pub fn group_row(&self, index: usize, label: &str, pattern: Option<&str>) -> String {
        let label = self.paint(&self.label, format!("{label:<LABEL_WIDTH$}"));
        let pattern = match pattern {
            Some(pattern) => self.paint(&self.pattern, pattern),
            None => self.paint(&self.rule, "(everything else)"),
        };
        format!("  {index:>2}. {label} {pattern}")
    }

    /// Summary line of a run, marked ✓ when nothing is left to fix
    pub fn outcome(&self, text: &str, ok: bool) -> String {
        match (ok, self.colors) {
            (true, true) => format!("{} {}", "✓".green(), text.bold()),
            (false, true) => format!("{} {}", "✗".red(), text.bold()),
            (true, false) => format!("✓ {text}"),
            (false, false) => format!("✗ {text}"),
        }
    }

    /// A file that could not be checked
    pub fn file_error(&self, path: &Path, message: &str) -> String {
        let text = format!("{}: {message}", path.display());
        if self.colors {
            format!("{} {}", "⚠".yellow(), text.yellow())
        } else {
            format!("⚠ {text}")
        }
    }
}
