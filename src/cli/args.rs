//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all tscat commands.
//! It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Run consistency checks over translation catalogs
//! - `lookup`: Translate one string the way an application would
//! - `stats`: Show translation progress per catalog
//! - `fmt`: Rewrite catalogs in canonical lupdate layout
//! - `export`: Dump a catalog as JSON
//! - `init`: Initialize tscat configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(name = "tscat", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to search for .tscatrc.json from (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output (debug logging to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Catalog files or directories (default: translationsRoot from config)
    pub paths: Vec<PathBuf>,

    /// Rules to run (default: all)
    /// Can be specified multiple times: --rules placeholder --rules conflict
    #[arg(long, value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file to load
    pub catalog: PathBuf,

    /// Source text to translate
    pub source: String,

    /// Arguments substituted for %1, %2, ...
    pub args: Vec<String>,

    /// Context (UI component) of the source text
    #[arg(short, long)]
    pub context: String,

    /// Disambiguation comment of the source text
    #[arg(short, long)]
    pub disambiguation: Option<String>,

    /// Count for numerus messages; selects the plural form and replaces %n
    #[arg(short = 'n', long = "count", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Exit with status 1 when no translation was found
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Catalog files or directories (default: translationsRoot from config)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Catalog files or directories (default: translationsRoot from config)
    pub paths: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Catalog file to export
    pub catalog: PathBuf,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, untranslated and inconsistent messages
    Check(CheckCommand),
    /// Look up the translation of a source text (falls back to the source)
    Lookup(LookupCommand),
    /// Show translation progress per catalog
    Stats(StatsCommand),
    /// Rewrite catalogs in canonical layout
    Fmt(FmtCommand),
    /// Export a catalog as JSON
    Export(ExportCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup() {
        let args = Arguments::try_parse_from([
            "tscat",
            "lookup",
            "dde-dock_ar.ts",
            "--context",
            "WiredItem",
            "Wired connection: %1",
            "eth0",
        ])
        .unwrap();

        let Some(Command::Lookup(cmd)) = args.command else {
            panic!("expected lookup command");
        };
        assert_eq!(cmd.context, "WiredItem");
        assert_eq!(cmd.source, "Wired connection: %1");
        assert_eq!(cmd.args, vec!["eth0"]);
        assert_eq!(cmd.count, None);
    }

    #[test]
    fn test_parse_check_rules() {
        let args = Arguments::try_parse_from([
            "tscat",
            "check",
            "--rules",
            "placeholder",
            "--rules",
            "conflict",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose());
        let Some(Command::Check(cmd)) = args.command else {
            panic!("expected check command");
        };
        assert_eq!(cmd.rules, vec![CheckRule::Placeholder, CheckRule::Conflict]);
        assert!(cmd.paths.is_empty());
    }

    #[test]
    fn test_verify_cli() {
        Arguments::command().debug_assert();
    }
}
