use std::fs;

use anyhow::{Context, Ok, Result};

use super::super::args::ExportCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary, ExportSummary},
};
use crate::core::parsers::parse_ts_file;

/// Dump a catalog as pretty-printed JSON.
pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.catalog)
        .with_context(|| format!("Failed to load catalog {}", cmd.catalog.display()))?;
    let mut json = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
    json.push('\n');

    let json = match &cmd.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            None
        }
        None => Some(json),
    };

    let summary = CommandSummary::Export(ExportSummary {
        json,
        output: cmd.output,
        message_count: catalog.message_count(),
    });
    Ok(finish(summary, Vec::new(), 1, true))
}
