//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tscat to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStats, CommandResult, CommandSummary, ExportSummary, FmtSummary, InitSummary,
    LookupSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format.
///
/// Issues are expected to be sorted already (see `helper::finish`).
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {} - no issues found",
            catalogs,
            plural(catalogs, "catalog", "catalogs")
        )
        .green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line
    match line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = issues.len();

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        total_problems,
        plural(total_problems, "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, Option<usize>) {
    match loc {
        ReportLocation::Entry(entry) => (entry.file_path.as_str(), Some(entry.line)),
        ReportLocation::File { path, line } => (*path, *line),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| extract_location_info(&i.location()).1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// Command Output
// ============================================================

pub fn print(result: &CommandResult) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_to(result, &mut out);
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Check => {
            report_to(&result.issues, writer);
            if result.issues.is_empty() {
                print_success_to(result.catalogs_checked, writer);
            }
        }
        CommandSummary::Lookup(summary) => print_lookup(summary, writer),
        CommandSummary::Stats(stats) => {
            print_stats(stats, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Fmt(summary) => {
            print_fmt(summary, writer);
            report_to(&result.issues, writer);
        }
        CommandSummary::Export(summary) => print_export(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_lookup<W: Write>(summary: &LookupSummary, writer: &mut W) {
    let _ = writeln!(writer, "{}", summary.text);
    if summary.strict && !summary.found {
        eprintln!("{} no translation found", "error:".bold().red());
    }
}

fn print_stats<W: Write>(stats: &[CatalogStats], writer: &mut W) {
    if stats.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let path_width = stats
        .iter()
        .map(|s| UnicodeWidthStr::width(s.path.as_str()))
        .max()
        .unwrap_or(0);

    for s in stats {
        let padding = path_width - UnicodeWidthStr::width(s.path.as_str());
        let _ = writeln!(
            writer,
            "{}{:padding$}  {:<5}  {:>5.1}%  {} finished, {} unfinished, {} untranslated, {} obsolete",
            s.path,
            "",
            s.language.as_deref().unwrap_or("-"),
            s.percent_finished(),
            s.finished,
            s.unfinished,
            s.untranslated,
            s.obsolete,
            padding = padding
        );
    }
}

fn print_fmt<W: Write>(summary: &FmtSummary, writer: &mut W) {
    if !summary.lossy.is_empty() {
        print_lossy(&summary.lossy, writer);
    }
    if summary.changed.is_empty() && summary.lossy.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} {} already formatted",
                summary.checked,
                plural(summary.checked, "catalog", "catalogs")
            )
            .green()
        );
        return;
    }
    if summary.changed.is_empty() {
        return;
    }

    let count = summary.changed.len();
    let files = plural(count, "file", "files");
    if summary.is_apply {
        let _ = writeln!(writer, "{} {} {}:", "Reformatted".green().bold(), count, files);
    } else {
        let _ = writeln!(writer, "{} {} {}:", "Would reformat".yellow().bold(), count, files);
    }
    for path in &summary.changed {
        let _ = writeln!(writer, "  {}", path);
    }
    if !summary.is_apply {
        let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_lossy<W: Write>(paths: &[String], writer: &mut W) {
    let count = paths.len();
    let _ = writeln!(
        writer,
        "{} {} {} with content the formatter does not keep:",
        "Skipped".yellow().bold(),
        count,
        plural(count, "file", "files")
    );
    for path in paths {
        let _ = writeln!(writer, "  {}", path);
    }
    let _ = writeln!(
        writer,
        "{} XML comments and elements such as <userdata> would be lost",
        "   = note:".bold()
    );
}

fn print_export<W: Write>(summary: &ExportSummary, writer: &mut W) {
    match (&summary.json, &summary.output) {
        (Some(json), _) => {
            let _ = write!(writer, "{}", json);
        }
        (None, Some(path)) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Exported {} {} to {}",
                    summary.message_count,
                    plural(summary.message_count, "message", "messages"),
                    path.display()
                )
                .green()
            );
        }
        (None, None) => {}
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    match &summary.error {
        Some(error) => eprintln!("Error: {}", error),
        None => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}
