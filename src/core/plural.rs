//! Plural form selection for numerus messages.
//!
//! A numerus translation stores one string per plural form of the target
//! language, in the order defined by that language's rule.

/// Plural rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, ...).
    Single,
    /// `n == 1` / other (English and most Germanic/Romance languages).
    OneOther,
    /// `n <= 1` / other (French).
    ZeroOneOther,
    /// Russian, Ukrainian, Serbian, ...: one / few / many by last digits.
    EastSlavic,
    /// Polish: one only for exactly 1.
    Polish,
    /// Czech and Slovak: 1 / 2..=4 / other.
    CzechSlovak,
    /// Arabic six forms: zero / one / two / few / many / other.
    Arabic,
}

impl PluralRule {
    /// Rule for a language tag such as `ar`, `ar_EG` or `pt-BR`.
    ///
    /// Unknown languages use [`PluralRule::OneOther`].
    pub fn for_language(tag: &str) -> Self {
        let normalized = tag.replace('-', "_").to_ascii_lowercase();
        if normalized == "pt_br" {
            return PluralRule::ZeroOneOther;
        }
        let primary = normalized.split('_').next().unwrap_or_default();
        match primary {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "km" | "my" => {
                PluralRule::Single
            }
            "fr" | "ln" => PluralRule::ZeroOneOther,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::CzechSlovak,
            "ar" => PluralRule::Arabic,
            _ => PluralRule::OneOther,
        }
    }

    /// Number of numerus forms a translation must provide.
    pub fn form_count(self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::OneOther | PluralRule::ZeroOneOther => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::CzechSlovak => 3,
            PluralRule::Arabic => 6,
        }
    }

    /// Index of the form to use for `n`.
    pub fn form_index(self, n: i64) -> usize {
        let n = n.unsigned_abs();
        let n10 = n % 10;
        let n100 = n % 100;
        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOneOther => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if n10 == 1 && n100 != 11 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n10) && !(12..=14).contains(&n100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&n100) => 3,
                _ if (11..=99).contains(&n100) => 4,
                _ => 5,
            },
        }
    }
}
