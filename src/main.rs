//! CLI entry point for the import grouping linter.
//!
//! Provides commands for checking and fixing files, inspecting the resolved
//! groups and managing the settings file.

use anyhow::Context;
use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use import_grouping::config::load_group_options;
use import_grouping::display::THEME;
use import_grouping::io::{ExitCode, OutputFormat, OutputManager};
use import_grouping::{ImportGroupingRule, LintError, Linter, Settings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{Level, debug};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Import grouping linter
#[derive(Parser)]
#[command(
    name = "import-grouping",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check that imports are grouped under their label comments",
    long_about = "Check that the imports at the top of JavaScript, TypeScript and Vue files \
                  are clustered into labeled groups, and rewrite them when they are not.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Check files for import grouping violations
    #[command(
        about = "Check (and optionally fix) import groups",
        after_help = "Examples:\n  import-grouping check src\n  import-grouping check src/App.vue --fix\n  import-grouping check . --groups groups.json --json\n\nExit codes:\n  0  no violations left\n  1  violations remain\n  4  a file failed to parse\n  5  a file could not be read or written\n  6  invalid configuration"
    )]
    Check {
        /// Files or directories to check
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Rewrite import blocks in place
        #[arg(long)]
        fix: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        /// Rule options file: a JSON array of { "regex", "label" } objects
        #[arg(long, value_name = "FILE")]
        groups: Option<PathBuf>,
    },

    /// Show the resolved group order
    #[command(about = "List groups in the order they are written")]
    Groups {
        /// Output results as JSON
        #[arg(long)]
        json: bool,

        /// Rule options file: a JSON array of { "regex", "label" } objects
        #[arg(long, value_name = "FILE")]
        groups: Option<PathBuf>,
    },

    /// Initialize project
    #[command(about = "Set up .import-grouping directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .import-grouping/settings.toml")]
    Config,
}

impl Commands {
    fn output_format(&self) -> OutputFormat {
        match self {
            Commands::Check { json, .. } | Commands::Groups { json, .. } => {
                OutputFormat::from_json_flag(*json)
            }
            Commands::Init { .. } | Commands::Config => OutputFormat::Text,
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(config: Option<&Path>) -> Result<Settings, Box<figment::Error>> {
    match config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

/// Replace the configured groups with those from a rule options file.
fn with_group_options(mut settings: Settings, groups: Option<&Path>) -> anyhow::Result<Settings> {
    if let Some(path) = groups {
        settings.groups = Some(load_group_options(path)?);
        debug!("Loaded group options from {}", path.display());
    }
    Ok(settings)
}

fn run(command: Commands, settings: Settings, output: &mut OutputManager) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Check {
            paths,
            fix,
            groups,
            ..
        } => {
            let settings = with_group_options(settings, groups.as_deref())?;
            let linter = Linter::new(Arc::new(settings))?.with_fix(fix);
            let summary = linter.lint_paths(&paths);
            Ok(output.summary(&summary)?)
        }

        Commands::Groups { groups, .. } => {
            let settings = with_group_options(settings, groups.as_deref())?;
            let rule = ImportGroupingRule::from_settings(&settings)?;
            Ok(output.groups(&rule)?)
        }

        Commands::Init { force } => {
            let path = Settings::init_config_file(force)?;
            println!(
                "{}",
                THEME.outcome(
                    &format!("Created configuration file at: {}", path.display()),
                    true
                )
            );
            println!("Edit this file to customize your groups.");
            Ok(ExitCode::Success)
        }

        Commands::Config => {
            let toml_str =
                toml::to_string_pretty(&settings).context("Failed to render configuration")?;
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{toml_str}");
            Ok(ExitCode::Success)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", THEME.outcome(&format!("Configuration error: {e}"), false));
            std::process::exit(ExitCode::ConfigError.into());
        }
    };

    init_logging(cli.verbose || settings.debug);

    let format = cli.command.output_format();
    let mut output = OutputManager::new(format);

    let code = match run(cli.command, settings, &mut output) {
        Ok(code) => code,
        Err(e) => match e.downcast_ref::<LintError>() {
            Some(lint_error) => output
                .error(lint_error)
                .unwrap_or_else(|_| ExitCode::from_error(lint_error)),
            None => {
                eprintln!("Error: {e:#}");
                ExitCode::BlockingError
            }
        },
    };

    std::process::exit(code.into());
}
