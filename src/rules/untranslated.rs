//! Untranslated message detection rule.
//!
//! A message without translated text falls back to the source string at
//! runtime, so users see the untranslated UI text.

use crate::{
    core::LoadedCatalog,
    issues::UntranslatedIssue,
    rules::helpers::{active_messages, entry_location},
};

/// Find active messages whose translation (every numerus form) is empty.
pub fn check_untranslated(catalogs: &[LoadedCatalog]) -> Vec<UntranslatedIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| {
            active_messages(loaded)
                .filter(|(_, message)| message.translation.is_empty())
                .map(move |(context, message)| UntranslatedIssue {
                    entry: entry_location(loaded, context, message),
                })
        })
        .collect()
}
