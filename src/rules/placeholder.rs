//! Placeholder mismatch detection rule.
//!
//! Positional markers (`%1`, `%L2`, ...) are replaced with runtime arguments.
//! A translation that drops one loses the argument; one that adds an unknown
//! marker shows it verbatim. `%n` is not compared: numerus forms such as
//! "one file" legitimately omit the count.

use std::collections::BTreeSet;

use crate::{
    core::{
        LoadedCatalog, Translation,
        data::length_variants,
        placeholder::{Marker, arg_markers},
    },
    issues::PlaceholderMismatchIssue,
    rules::helpers::{active_messages, entry_location},
};

/// Find translations whose positional markers differ from the source.
///
/// Empty translations and empty numerus forms are skipped; each numerus
/// form and each length variant is compared on its own.
pub fn check_placeholders(catalogs: &[LoadedCatalog]) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for (context, message) in active_messages(loaded) {
            let expected = arg_markers(&message.source);
            let forms: Vec<(Option<usize>, &str)> = match &message.translation {
                Translation::Single(text) => vec![(None, text.as_str())],
                Translation::Numerus(forms) => forms
                    .iter()
                    .enumerate()
                    .map(|(i, f)| (Some(i), f.as_str()))
                    .collect(),
            };

            for (form, text) in forms {
                let mismatch = length_variants(text)
                    .filter(|variant| !variant.is_empty())
                    .map(arg_markers)
                    .find(|actual| *actual != expected);
                let Some(actual) = mismatch else {
                    continue;
                };
                issues.push(PlaceholderMismatchIssue {
                    entry: entry_location(loaded, context, message),
                    missing: difference(&expected, &actual),
                    unexpected: difference(&actual, &expected),
                    form,
                });
            }
        }
    }

    issues
}

fn difference(a: &BTreeSet<Marker>, b: &BTreeSet<Marker>) -> Vec<Marker> {
    a.difference(b).copied().collect()
}
