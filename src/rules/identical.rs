//! Identical translation detection rule.
//!
//! A translation equal to its source usually means the text was copied and
//! never translated. Texts without letters (numbers, symbols, bare
//! placeholders) and sources listed in `ignoreTexts` are exempt.

use std::collections::HashSet;

use crate::{
    core::LoadedCatalog,
    issues::IdenticalIssue,
    rules::helpers::{active_messages, entry_location},
    utils::contains_alphabetic,
};

/// Find translations (or numerus forms) identical to the source text.
pub fn check_identical(catalogs: &[LoadedCatalog], ignore_texts: &[String]) -> Vec<IdenticalIssue> {
    let ignored: HashSet<&str> = ignore_texts.iter().map(String::as_str).collect();

    catalogs
        .iter()
        .flat_map(|loaded| {
            active_messages(loaded)
                .filter(|(_, message)| {
                    contains_alphabetic(&message.source)
                        && !ignored.contains(message.source.as_str())
                        && message.translation.forms().any(|f| f == message.source)
                })
                .map(move |(context, message)| IdenticalIssue {
                    entry: entry_location(loaded, context, message),
                })
        })
        .collect()
}
