//! Runtime lookup with fallback.
//!
//! A [`Translator`] answers `(context, source)` lookups against the
//! catalogs installed into it. A miss is never an error: the source text is
//! returned unchanged so the UI always has something to show.

use std::path::Path;

use tracing::debug;

use crate::core::{
    CatalogError,
    data::{Catalog, Message, Translation, primary_variant},
    locate::locate_catalog,
    parsers::parse_ts_file,
    placeholder::{substitute, substitute_count},
    plural::PluralRule,
};

/// Options applied when serving translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Serve non-empty translations still marked unfinished.
    pub include_unfinished: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            include_unfinished: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
    /// Installed catalogs; the last one is searched first.
    catalogs: Vec<Catalog>,
    options: LoadOptions,
}

impl Translator {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            catalogs: Vec::new(),
            options,
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        let mut translator = Self::default();
        translator.install(catalog);
        translator
    }

    /// Load a single catalog file.
    pub fn load(path: &Path, options: LoadOptions) -> Result<Self, CatalogError> {
        let mut translator = Self::new(options);
        translator.install(parse_ts_file(path)?);
        Ok(translator)
    }

    /// Load `<prefix>_<locale>.ts` from `dir`, falling back to less specific names.
    ///
    /// Returns `Ok(None)` when no file matches; the caller then shows source texts.
    pub fn load_for_locale(
        dir: &Path,
        prefix: &str,
        locale: &str,
        options: LoadOptions,
    ) -> Result<Option<Self>, CatalogError> {
        match locate_catalog(dir, prefix, locale) {
            Some(path) => Self::load(&path, options).map(Some),
            None => Ok(None),
        }
    }

    /// Install a catalog; it takes precedence over those installed before.
    pub fn install(&mut self, catalog: Catalog) {
        self.catalogs.push(catalog);
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn options(&self) -> LoadOptions {
        self.options
    }

    /// Find the message serving a key, with its catalog.
    ///
    /// An exact disambiguation match wins; otherwise the lookup retries
    /// without disambiguation.
    pub fn find_message(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Option<(&Catalog, &Message)> {
        let include_unfinished = self.options.include_unfinished;
        let disambiguation = disambiguation.unwrap_or("");

        for catalog in self.catalogs.iter().rev() {
            if let Some(message) = catalog.find(context, source, disambiguation, include_unfinished)
            {
                return Some((catalog, message));
            }
            if !disambiguation.is_empty()
                && let Some(message) = catalog.find(context, source, "", include_unfinished)
            {
                return Some((catalog, message));
            }
        }
        None
    }

    /// Translation for a key, without fallback.
    ///
    /// For numerus messages this is the first non-empty form. Strings with
    /// length variants yield the first (longest) variant.
    pub fn lookup(&self, context: &str, source: &str, disambiguation: Option<&str>) -> Option<&str> {
        self.find_message(context, source, disambiguation)
            .and_then(|(_, message)| message.translation.forms().find(|f| !f.is_empty()))
            .map(primary_variant)
    }

    /// Numerus form for `n`, without fallback and with `%n` left in place.
    ///
    /// The form is chosen with the plural rule of the catalog language. A
    /// missing or empty form is a miss.
    pub fn lookup_n(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        n: i64,
    ) -> Option<&str> {
        self.find_message(context, source, disambiguation)
            .and_then(|(catalog, message)| select_form(catalog, message, n))
    }

    /// Translation for `(context, source)`, or `source` itself.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_disambiguated(context, source, None)
    }

    pub fn translate_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
    ) -> &'a str {
        match self.lookup(context, source, disambiguation) {
            Some(translated) => translated,
            None => {
                debug!(context, source, "no translation, using source text");
                source
            }
        }
    }

    /// Translate then substitute `%1`..`%99` with `args`.
    pub fn translate_args<S: AsRef<str>>(&self, context: &str, source: &str, args: &[S]) -> String {
        substitute(self.translate(context, source), args)
    }

    /// Translate a numerus message for `n` and replace `%n` with it.
    ///
    /// Falls back to the source text when [`Translator::lookup_n`] misses.
    pub fn translate_n(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
        n: i64,
    ) -> String {
        let text = self
            .lookup_n(context, source, disambiguation, n)
            .unwrap_or_else(|| {
                debug!(context, source, n, "no numerus translation, using source text");
                source
            });
        substitute_count(text, n)
    }
}

fn select_form<'a>(catalog: &Catalog, message: &'a Message, n: i64) -> Option<&'a str> {
    match &message.translation {
        Translation::Single(text) => Some(primary_variant(text)).filter(|t| !t.is_empty()),
        Translation::Numerus(forms) => {
            let rule = catalog
                .language
                .as_deref()
                .map(PluralRule::for_language)
                .unwrap_or(PluralRule::OneOther);
            let index = rule.form_index(n).min(forms.len().saturating_sub(1));
            forms
                .get(index)
                .map(String::as_str)
                .map(primary_variant)
                .filter(|t| !t.is_empty())
        }
    }
}
