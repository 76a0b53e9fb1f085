use std::fmt;

use serde::Serialize;

/// Where a source string appears in application code.
///
/// Advisory metadata for translators. Never consulted by lookups.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Location {
    /// Path as written by the extraction tool (e.g., "../plugins/trash/trashplugin.cpp").
    pub filename: String,
    /// Line number (1-indexed), absent when the tool was told to omit lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line: Some(line),
        }
    }

    /// Create a location that only names the file.
    pub fn file_only(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            line: None,
        }
    }
}

/// State of a translation, stored in the `type` attribute of `<translation>`.
///
/// A translation without a `type` attribute is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationType {
    #[default]
    Finished,
    Unfinished,
    /// The source string disappeared from the code (current lupdate).
    Vanished,
    /// The source string disappeared from the code (legacy lupdate).
    Obsolete,
}

impl TranslationType {
    /// Value of the `type` attribute, `None` for finished translations.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            TranslationType::Finished => None,
            TranslationType::Unfinished => Some("unfinished"),
            TranslationType::Vanished => Some("vanished"),
            TranslationType::Obsolete => Some("obsolete"),
        }
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationType::Unfinished),
            "vanished" => Some(TranslationType::Vanished),
            "obsolete" => Some(TranslationType::Obsolete),
            _ => None,
        }
    }

    /// Vanished and obsolete messages are kept for translators but never served.
    pub fn is_retired(self) -> bool {
        matches!(self, TranslationType::Vanished | TranslationType::Obsolete)
    }
}

impl fmt::Display for TranslationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attribute().unwrap_or("finished"))
    }
}

/// Separates the length variants of one translated string, as Qt stores them.
///
/// Variants are ordered longest first; the UI picks the first that fits.
pub const LENGTH_VARIANT_SEPARATOR: char = '\u{9c}';

/// Length variants of a translated string; a plain string is its only variant.
pub fn length_variants(text: &str) -> impl Iterator<Item = &str> {
    text.split(LENGTH_VARIANT_SEPARATOR)
}

/// The variant served by lookups: the first (longest) one.
pub fn primary_variant(text: &str) -> &str {
    text.split_once(LENGTH_VARIANT_SEPARATOR)
        .map_or(text, |(first, _)| first)
}

/// Join length variants into one translated string.
pub fn join_length_variants<S: AsRef<str>>(variants: &[S]) -> String {
    let mut text = String::new();
    for (i, variant) in variants.iter().enumerate() {
        if i > 0 {
            text.push(LENGTH_VARIANT_SEPARATOR);
        }
        text.push_str(variant.as_ref());
    }
    text
}

/// Translated text of a message.
///
/// Numerus messages carry one string per plural form of the target language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Translation {
    Single(String),
    Numerus(Vec<String>),
}

impl Translation {
    /// True when no form carries any text.
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Single(text) => text.is_empty(),
            Translation::Numerus(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    /// All translated strings (one for plain messages).
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Translation::Single(text) => std::slice::from_ref(text),
            Translation::Numerus(forms) => forms,
        };
        slice.iter().map(String::as_str)
    }

    /// Text shown when reporting the translation in one line.
    pub fn display_text(&self) -> String {
        match self {
            Translation::Single(text) => text.clone(),
            Translation::Numerus(forms) => forms.join(" | "),
        }
    }
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Single(String::new())
    }
}

/// A single translation entry of a context.
///
/// `file_line` is provenance for diagnostics and does not take part in equality,
/// so a catalog compares equal to itself after being written and parsed again.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_source: Option<String>,
    /// Disambiguation, part of the lookup key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_comment: Option<String>,
    /// Comment for translators written next to the source string in code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    pub translation: Translation,
    pub translation_type: TranslationType,
    /// Line of the `<message>` element in the catalog file (1-indexed, 0 if built in memory).
    #[serde(skip)]
    pub file_line: usize,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Single(translation.into()),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_type(mut self, translation_type: TranslationType) -> Self {
        self.translation_type = translation_type;
        self
    }

    pub fn with_numerus_forms(mut self, forms: Vec<String>) -> Self {
        self.translation = Translation::Numerus(forms);
        self
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self.translation, Translation::Numerus(_))
    }

    /// Disambiguation as a plain string; absent and empty are the same key.
    pub fn disambiguation(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Whether a lookup may return this message's translation.
    pub fn is_servable(&self, include_unfinished: bool) -> bool {
        if self.translation_type.is_retired() || self.translation.is_empty() {
            return false;
        }
        include_unfinished || self.translation_type != TranslationType::Unfinished
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.locations == other.locations
            && self.source == other.source
            && self.old_source == other.old_source
            && self.comment == other.comment
            && self.old_comment == other.old_comment
            && self.extra_comment == other.extra_comment
            && self.translator_comment == other.translator_comment
            && self.translation == other.translation
            && self.translation_type == other.translation_type
    }
}

impl Eq for Message {}
