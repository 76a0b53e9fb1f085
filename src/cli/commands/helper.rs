use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::{
    cli::CommonArgs,
    config::{ConfigLoadResult, load_config},
    core::{CatalogScanWarning, ScanCatalogsResult, scan_catalogs},
    issues::{Issue, ParseErrorIssue, Severity},
};

/// Load config starting from `--root` or the current directory.
pub fn load_project(common: &CommonArgs) -> Result<ConfigLoadResult> {
    let start_dir = match &common.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    load_config(&start_dir)
}

/// Paths given on the command line, or `translationsRoot` relative to the config.
pub fn resolve_paths(project: &ConfigLoadResult, paths: &[PathBuf]) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![project.root.join(&project.config.translations_root)]
    } else {
        paths.to_vec()
    }
}

/// Scan catalogs for a command, honouring config ignores.
pub fn scan_project(project: &ConfigLoadResult, paths: &[PathBuf]) -> Result<ScanCatalogsResult> {
    let paths = resolve_paths(project, paths);
    scan_catalogs(&project.root, &paths, &project.config.ignores)
}

pub fn parse_error_issues(warnings: &[CatalogScanWarning]) -> Vec<Issue> {
    warnings
        .iter()
        .map(|w| {
            Issue::ParseError(ParseErrorIssue {
                file_path: w.file_path.clone(),
                line: w.line,
                error: w.error.clone(),
            })
        })
        .collect()
}

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    catalogs_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    match &summary {
        CommandSummary::Init(init) if init.error.is_some() => error_count += 1,
        CommandSummary::Lookup(lookup) if lookup.strict && !lookup.found => error_count += 1,
        _ => {}
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        catalogs_checked,
    }
}
