//! Placeholder markers in source and translated strings.
//!
//! Markers follow Qt conventions: `%1` to `%99` are positional arguments,
//! `%L1` is the locale-aware variant of the same argument, and `%n` / `%Ln`
//! stand for the count of a numerus message.

use std::{collections::BTreeSet, fmt, sync::LazyLock};

use regex::{Captures, Regex};

static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(L?)(n|[1-9][0-9]?)").unwrap());

/// A placeholder found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// `%1` .. `%99` (and their `%L` forms).
    Arg(u8),
    /// `%n` / `%Ln`.
    Count,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Arg(n) => write!(f, "%{}", n),
            Marker::Count => write!(f, "%n"),
        }
    }
}

fn marker_of(caps: &Captures<'_>) -> Marker {
    match &caps[2] {
        "n" => Marker::Count,
        digits => Marker::Arg(digits.parse().unwrap_or(0)),
    }
}

/// All markers present in `text`.
pub fn markers(text: &str) -> BTreeSet<Marker> {
    MARKER_REGEX
        .captures_iter(text)
        .map(|caps| marker_of(&caps))
        .collect()
}

/// Positional markers only, ignoring `%n`.
pub fn arg_markers(text: &str) -> BTreeSet<Marker> {
    markers(text)
        .into_iter()
        .filter(|m| matches!(m, Marker::Arg(_)))
        .collect()
}

/// Replace `%N` / `%LN` with `args[N - 1]`.
///
/// Substitution happens in one pass, so an argument that itself contains
/// `%2` is inserted literally. Markers without a matching argument and `%n`
/// are left untouched.
///
/// # Examples
///
/// ```
/// use tscat::core::placeholder::substitute;
///
/// assert_eq!(substitute("Charging %1", &["80%"]), "Charging 80%");
/// assert_eq!(substitute("%2 of %1", &["a", "b"]), "b of a");
/// assert_eq!(substitute("%1 and %3", &["x"]), "x and %3");
/// ```
pub fn substitute<S: AsRef<str>>(text: &str, args: &[S]) -> String {
    MARKER_REGEX
        .replace_all(text, |caps: &Captures<'_>| match marker_of(caps) {
            Marker::Arg(n) => args
                .get(usize::from(n).wrapping_sub(1))
                .map(|arg| arg.as_ref().to_string())
                .unwrap_or_else(|| caps[0].to_string()),
            Marker::Count => caps[0].to_string(),
        })
        .into_owned()
}

/// Replace `%n` / `%Ln` with `count`, leaving positional markers alone.
pub fn substitute_count(text: &str, count: i64) -> String {
    MARKER_REGEX
        .replace_all(text, |caps: &Captures<'_>| match marker_of(caps) {
            Marker::Count => count.to_string(),
            Marker::Arg(_) => caps[0].to_string(),
        })
        .into_owned()
}
