use anyhow::{Context, Ok, Result};

use super::super::args::LookupCommand;
use super::{
    helper::{finish, load_project},
    {CommandResult, CommandSummary, LookupSummary},
};
use crate::core::{
    Translator,
    placeholder::{substitute, substitute_count},
};

/// Translate one source text the way an application using the catalog would.
///
/// Unknown keys print the source text itself; `--strict` turns that into a
/// failure exit status.
pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let project = load_project(&cmd.common)?;
    let translator = Translator::load(&cmd.catalog, project.config.load_options())
        .with_context(|| format!("Failed to load catalog {}", cmd.catalog.display()))?;

    let disambiguation = cmd.disambiguation.as_deref();
    let (translated, found) = match cmd.count {
        Some(n) => {
            let form = translator.lookup_n(&cmd.context, &cmd.source, disambiguation, n);
            (substitute_count(form.unwrap_or(&cmd.source), n), form.is_some())
        }
        None => {
            let text = translator.lookup(&cmd.context, &cmd.source, disambiguation);
            (text.unwrap_or(&cmd.source).to_string(), text.is_some())
        }
    };
    let text = substitute(&translated, &cmd.args);

    let summary = CommandSummary::Lookup(LookupSummary {
        text,
        found,
        strict: cmd.strict,
    });
    Ok(finish(summary, Vec::new(), 1, true))
}
