//! Numerus form count rule.
//!
//! A numerus translation needs exactly one form per plural category of the
//! catalog language (six for Arabic). With fewer forms some counts fall back
//! to the last form; extra forms are never used.

use crate::{
    core::{LoadedCatalog, Translation, plural::PluralRule},
    issues::NumerusFormsIssue,
    rules::helpers::{active_messages, entry_location},
};

/// Find numerus messages whose form count does not match the plural rule.
///
/// Catalogs without a `language` attribute are skipped.
pub fn check_numerus(catalogs: &[LoadedCatalog]) -> Vec<NumerusFormsIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        let Some(language) = loaded.catalog.language.as_deref() else {
            continue;
        };
        let expected = PluralRule::for_language(language).form_count();

        for (context, message) in active_messages(loaded) {
            if let Translation::Numerus(forms) = &message.translation
                && forms.len() != expected
            {
                issues.push(NumerusFormsIssue {
                    entry: entry_location(loaded, context, message),
                    language: language.to_string(),
                    expected,
                    actual: forms.len(),
                });
            }
        }
    }

    issues
}
