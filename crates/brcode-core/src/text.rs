//! # Text Normalization
//!
//! Turns merchant-entered text into what the payload fields carry.
//!
//! ## Pipeline
//! ```text
//! "Café Ipê"
//!      │  NFD (canonical decomposition)
//!      ▼
//! "Cafe\u{301} Ipe\u{302}"
//!      │  strip U+0300..=U+036F
//!      ▼
//! "Cafe Ipe"
//!      │  drop anything outside ASCII
//!      ▼
//! "Cafe Ipe"
//!      │  truncate to max_len characters
//!      ▼
//! "Cafe Ipe"
//!      │  ASCII uppercase
//!      ▼
//! "CAFE IPE"
//! ```
//!
//! Truncation counts characters after diacritics are gone, so `"São"` is
//! three characters, not four or five.

use icu_normalizer::DecomposingNormalizerBorrowed;

/// First code point of the Combining Diacritical Marks block.
const COMBINING_MARKS_START: char = '\u{0300}';

/// Last code point of the Combining Diacritical Marks block.
const COMBINING_MARKS_END: char = '\u{036F}';

/// Returns true for code points in the Combining Diacritical Marks block.
#[inline]
fn is_combining_mark(c: char) -> bool {
    (COMBINING_MARKS_START..=COMBINING_MARKS_END).contains(&c)
}

/// Normalizes free text for a payload field.
///
/// Total and deterministic: every input, including the empty string, maps
/// to an uppercase ASCII string of at most `max_len` characters.
/// Characters that do not decompose to ASCII (e.g. `º`, `ß`, `Ł`) are dropped,
/// so the result may be shorter than the visible input.
///
/// ## Example
/// ```rust
/// use brcode_core::text::normalize;
///
/// assert_eq!(normalize("São Paulo", 15), "SAO PAULO");
/// assert_eq!(normalize("Conceição", 5), "CONCE");
/// ```
pub fn normalize(text: &str, max_len: usize) -> String {
    let nfd = DecomposingNormalizerBorrowed::new_nfd();

    nfd.normalize(text)
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .take(max_len)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
