use std::path::{Path, PathBuf};

use tracing::debug;

/// Extension of Linguist catalogs.
pub const CATALOG_EXTENSION: &str = "ts";

/// Normalize a locale name to `ll_CC` form.
///
/// Drops the encoding (`.UTF-8`) and modifier (`@latin`) parts and turns
/// `-` separators into `_`.
pub fn normalize_locale(locale: &str) -> String {
    let locale = locale.split(['.', '@']).next().unwrap_or_default();
    locale.trim().replace('-', "_")
}

/// File names tried for `prefix` and `locale`, most specific first.
///
/// `("dde-dock", "ar_EG")` yields `dde-dock_ar_EG.ts`, `dde-dock_ar.ts`, `dde-dock.ts`.
pub fn candidate_file_names(prefix: &str, locale: &str) -> Vec<String> {
    let locale = normalize_locale(locale);
    let mut names = Vec::new();

    let mut parts: Vec<&str> = locale.split('_').filter(|p| !p.is_empty()).collect();
    while !parts.is_empty() {
        names.push(format!("{}_{}.{}", prefix, parts.join("_"), CATALOG_EXTENSION));
        parts.pop();
    }
    names.push(format!("{}.{}", prefix, CATALOG_EXTENSION));
    names
}

/// Find the catalog to load for `locale` in `dir`.
pub fn locate_catalog(dir: &Path, prefix: &str, locale: &str) -> Option<PathBuf> {
    let found = candidate_file_names(prefix, locale)
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file());

    match &found {
        Some(path) => debug!(locale, path = %path.display(), "located catalog"),
        None => debug!(locale, dir = %dir.display(), prefix, "no catalog for locale"),
    }
    found
}
