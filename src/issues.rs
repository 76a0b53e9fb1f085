//! Issue types for catalog checks.
//!
//! Each issue is self-contained: it carries everything the reporter needs to
//! show it (file, line, context, source text and rule-specific details).

use enum_dispatch::enum_dispatch;

use crate::core::placeholder::Marker;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    ConflictingTranslation,
    PlaceholderMismatch,
    NumerusForms,
    Untranslated,
    Unfinished,
    Identical,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::ConflictingTranslation => write!(f, "conflict"),
            Rule::PlaceholderMismatch => write!(f, "placeholder"),
            Rule::NumerusForms => write!(f, "numerus"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Identical => write!(f, "identical"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Entry location
// ============================================================

/// A message inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLocation {
    /// Path to the catalog (e.g., "./translations/dde-dock_ar.ts").
    pub file_path: String,
    /// Line of the `<message>` element (1-indexed).
    pub line: usize,
    pub context: String,
    pub source: String,
    pub disambiguation: Option<String>,
}

impl EntryLocation {
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        context: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            context: context.into(),
            source: source.into(),
            disambiguation: None,
        }
    }

    pub fn with_disambiguation(mut self, disambiguation: Option<&str>) -> Self {
        self.disambiguation = disambiguation
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        self
    }

    /// `Context` or `Context (disambiguation)` for notes.
    pub fn scope(&self) -> String {
        match &self.disambiguation {
            Some(d) => format!("{} ({})", self.context, d),
            None => self.context.clone(),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translation present but still marked unfinished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub entry: EntryLocation,
    pub translation: String,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message with no translated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub entry: EntryLocation,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Positional markers differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub entry: EntryLocation,
    /// Markers in the source that the translation drops.
    pub missing: Vec<Marker>,
    /// Markers in the translation that the source does not have.
    pub unexpected: Vec<Marker>,
    /// Numerus form index, for numerus messages.
    pub form: Option<usize>,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Same key translated more than once with different texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingTranslationIssue {
    pub entry: EntryLocation,
    /// Line of the first message with this key.
    pub first_line: usize,
    pub first_translation: String,
    pub translation: String,
}

impl ConflictingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ConflictingTranslation
    }
}

/// Numerus message with the wrong number of plural forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusFormsIssue {
    pub entry: EntryLocation,
    pub language: String,
    pub expected: usize,
    pub actual: usize,
}

impl NumerusFormsIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusForms
    }
}

/// Translation identical to the source text (possibly not translated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    pub entry: EntryLocation,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Untranslated(UntranslatedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    ConflictingTranslation(ConflictingTranslationIssue),
    NumerusForms(NumerusFormsIssue),
    Identical(IdenticalIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::severity(),
            Issue::ConflictingTranslation(_) => ConflictingTranslationIssue::severity(),
            Issue::NumerusForms(_) => NumerusFormsIssue::severity(),
            Issue::Identical(_) => IdenticalIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::PlaceholderMismatch(_) => PlaceholderMismatchIssue::rule(),
            Issue::ConflictingTranslation(_) => ConflictingTranslationIssue::rule(),
            Issue::NumerusForms(_) => NumerusFormsIssue::rule(),
            Issue::Identical(_) => IdenticalIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    /// File, line and rule; the order issues are printed in.
    pub fn sort_key(&self) -> (&str, usize, Rule) {
        match self.location() {
            ReportLocation::Entry(entry) => (entry.file_path.as_str(), entry.line, self.rule()),
            ReportLocation::File { path, line } => (path, line.unwrap_or(0), self.rule()),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Entry(&'a EntryLocation),
    /// File-level only (for ParseError).
    File { path: &'a str, line: Option<usize> },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards calls on `Issue`.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (source text or error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

fn join_markers(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: translation \"{}\" is marked unfinished",
            self.entry.scope(),
            self.translation
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("review the translation and mark it finished".to_string())
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{}: no translation, source text will be shown", self.entry.scope()))
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", join_markers(&self.missing)));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", join_markers(&self.unexpected)));
        }
        let form = self
            .form
            .map(|i| format!(" in numerus form {}", i + 1))
            .unwrap_or_default();
        Some(format!(
            "{}: translation{} has {}",
            self.entry.scope(),
            form,
            parts.join(", ")
        ))
    }
}

impl Report for ConflictingTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: \"{}\" here, \"{}\" at line {}",
            self.entry.scope(),
            self.translation,
            self.first_translation,
            self.first_line
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("only the first translation is used; remove or align the others".to_string())
    }
}

impl Report for NumerusFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}: '{}' needs {} numerus form(s), found {}",
            self.entry.scope(),
            self.language,
            self.expected,
            self.actual
        ))
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Entry(&self.entry)
    }

    fn message(&self) -> String {
        self.entry.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{}: translation is identical to the source", self.entry.scope()))
    }

    fn hint(&self) -> Option<String> {
        Some("add the text to 'ignoreTexts' in .tscatrc.json if this is intended".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
            line: self.line,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
