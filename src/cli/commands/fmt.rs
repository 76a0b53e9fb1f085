use std::fs;

use anyhow::{Context, Ok, Result};
use tracing::debug;

use super::super::args::FmtCommand;
use super::{
    helper::{finish, load_project, parse_error_issues, scan_project},
    {CommandResult, CommandSummary, FmtSummary},
};
use crate::core::write_ts;

/// Rewrite catalogs in the canonical layout produced by [`write_ts`].
///
/// Dry-run by default: only lists the files whose content would change.
/// Files that fail to parse are reported and never touched, and so are files
/// holding comments or elements the catalog model does not keep.
pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let project = load_project(&cmd.common)?;
    let scan = scan_project(&project, &cmd.paths)?;

    let mut changed = Vec::new();
    let mut lossy = Vec::new();
    for loaded in &scan.catalogs {
        let current = fs::read_to_string(&loaded.file)
            .with_context(|| format!("Failed to read {}", loaded.path))?;
        let formatted = write_ts(&loaded.catalog);
        if current == formatted {
            continue;
        }
        if loaded.catalog.dropped_content > 0 {
            debug!(
                file = %loaded.path,
                dropped = loaded.catalog.dropped_content,
                "not reformatting catalog with unknown content"
            );
            lossy.push(loaded.path.clone());
            continue;
        }

        if cmd.apply {
            fs::write(&loaded.file, &formatted)
                .with_context(|| format!("Failed to write {}", loaded.path))?;
            debug!(file = %loaded.path, "reformatted catalog");
        }
        changed.push(loaded.path.clone());
    }

    let summary = CommandSummary::Fmt(FmtSummary {
        changed,
        lossy,
        checked: scan.catalogs.len(),
        is_apply: cmd.apply,
    });
    Ok(finish(
        summary,
        parse_error_issues(&scan.warnings),
        scan.catalogs.len(),
        true,
    ))
}
