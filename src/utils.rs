//! Utility functions for string and number handling.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Case-fold a string for matching: NFC compose, then lowercase.
///
/// Accents are kept. The Spanish stopword list and synonym tables are
/// accented ("más", "también"), so stripping diacritics would break exact
/// matching. Composition makes "más" typed as `a` + U+0301 compare equal to
/// the precomposed form:
/// - "MÁS" → "más"
/// - "ma\u{301}s" → "más"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Lowercase only (assumes input is already NFC, which most text is).
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Word character in the regex `\w` sense: alphanumeric or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Round to two decimal places, the precision feedback weights are reported in.
///
/// Rounds the exact binary value, ties to even: 0.125 → 0.12, and 0.015
/// (stored just below 0.015) → 0.01. Scaling by 100 first would round both up.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
