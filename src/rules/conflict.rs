//! Conflicting translation detection rule.
//!
//! A key (context, source, disambiguation) should map to one translation.
//! When a catalog translates the same key twice with different texts, only
//! the first is ever served.

use std::collections::HashMap;

use crate::{
    core::LoadedCatalog,
    issues::ConflictingTranslationIssue,
    rules::helpers::{active_messages, entry_location},
};

/// Find repeated keys whose translations differ within one catalog.
///
/// Every later occurrence is reported against the first one. Identical
/// duplicates and empty translations are not conflicts.
pub fn check_conflicts(catalogs: &[LoadedCatalog]) -> Vec<ConflictingTranslationIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        // (context, source, disambiguation) -> (line, translation)
        let mut first_seen: HashMap<(&str, &str, &str), (usize, String)> = HashMap::new();

        for (context, message) in active_messages(loaded) {
            if message.translation.is_empty() {
                continue;
            }
            let key = (context, message.source.as_str(), message.disambiguation());
            let translation = message.translation.display_text();

            match first_seen.get(&key) {
                Some((first_line, first_translation)) => {
                    if *first_translation != translation {
                        issues.push(ConflictingTranslationIssue {
                            entry: entry_location(loaded, context, message),
                            first_line: *first_line,
                            first_translation: first_translation.clone(),
                            translation,
                        });
                    }
                }
                None => {
                    first_seen.insert(key, (message.file_line, translation));
                }
            }
        }
    }

    issues
}
