use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{
    helper::{finish, load_project, parse_error_issues, scan_project},
    {CatalogStats, CommandResult, CommandSummary},
};
use crate::core::{LoadedCatalog, TranslationType};

impl CatalogStats {
    pub fn of(loaded: &LoadedCatalog) -> Self {
        let mut stats = CatalogStats {
            path: loaded.path.clone(),
            language: loaded.catalog.language.clone(),
            ..Default::default()
        };

        for (_, message) in loaded.catalog.entries() {
            if message.translation_type.is_retired() {
                stats.obsolete += 1;
            } else if message.translation.is_empty() {
                stats.untranslated += 1;
            } else if message.translation_type == TranslationType::Unfinished {
                stats.unfinished += 1;
            } else {
                stats.finished += 1;
            }
        }
        stats
    }
}

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let project = load_project(&cmd.common)?;
    let scan = scan_project(&project, &cmd.paths)?;

    let stats: Vec<CatalogStats> = scan.catalogs.iter().map(CatalogStats::of).collect();
    let issues = parse_error_issues(&scan.warnings);

    Ok(finish(
        CommandSummary::Stats(stats),
        issues,
        scan.catalogs.len(),
        true,
    ))
}
