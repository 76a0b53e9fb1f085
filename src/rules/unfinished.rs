//! Unfinished translation detection rule.
//!
//! Linguist marks a translation unfinished until a translator confirms it.
//! Such text is still served by default but deserves review.

use crate::{
    core::{LoadedCatalog, TranslationType},
    issues::UnfinishedIssue,
    rules::helpers::{active_messages, entry_location},
};

/// Find non-empty translations still marked `type="unfinished"`.
///
/// Empty unfinished messages are reported by the untranslated rule instead.
pub fn check_unfinished(catalogs: &[LoadedCatalog]) -> Vec<UnfinishedIssue> {
    catalogs
        .iter()
        .flat_map(|loaded| {
            active_messages(loaded)
                .filter(|(_, message)| {
                    message.translation_type == TranslationType::Unfinished
                        && !message.translation.is_empty()
                })
                .map(move |(context, message)| UnfinishedIssue {
                    entry: entry_location(loaded, context, message),
                    translation: message.translation.display_text(),
                })
        })
        .collect()
}
