use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Stats(Vec<CatalogStats>),
    Fmt(FmtSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    /// Text to print: the translation, or the source when nothing matched.
    pub text: String,
    pub found: bool,
    pub strict: bool,
}

/// Message counts of one catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub path: String,
    pub language: Option<String>,
    pub finished: usize,
    pub unfinished: usize,
    pub untranslated: usize,
    /// Vanished and obsolete messages.
    pub obsolete: usize,
}

impl CatalogStats {
    /// Messages still in use (everything but obsolete ones).
    pub fn active(&self) -> usize {
        self.finished + self.unfinished + self.untranslated
    }

    /// Share of active messages with a finished translation, in percent.
    pub fn percent_finished(&self) -> f64 {
        match self.active() {
            0 => 100.0,
            active => self.finished as f64 * 100.0 / active as f64,
        }
    }
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Catalogs whose layout differs from the canonical one.
    pub changed: Vec<String>,
    /// Catalogs left alone because rewriting them would drop content.
    pub lossy: Vec<String>,
    pub checked: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct ExportSummary {
    /// JSON written to stdout when no output file was given.
    pub json: Option<String>,
    pub output: Option<PathBuf>,
    pub message_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Error message if the config could not be created.
    pub error: Option<String>,
}

/// Result of running tscat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit status 1 is returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found, sorted by file and line.
    /// Empty for commands that do not scan catalogs.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were parsed.
    pub catalogs_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors && self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
