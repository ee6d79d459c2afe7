//! Report text normalization
//!
//! Canonicalizes raw report text into the matchable form used by every
//! downstream engine: lowercase, diacritics folded, barangay-marker spelling
//! variants unified, punctuation collapsed to single spaces.

use regex::Regex;
use std::sync::OnceLock;

/// Spelling variants canonicalized to the marker token "brgy".
///
/// Whole-word matches only — replacing the bare substring "brg" would
/// corrupt unrelated words that merely contain it.
const BRGY_VARIANT_PATTERN: &str = r"\b(?:brg|bgry|brgay)\b";

/// Spelling variants canonicalized to the marker token "barangay"
const BARANGAY_VARIANT_PATTERN: &str = r"\b(?:baranggay|baragay)\b";

fn brgy_variant_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BRGY_VARIANT_PATTERN).expect("built-in marker pattern"))
}

fn barangay_variant_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BARANGAY_VARIANT_PATTERN).expect("built-in marker pattern"))
}

/// Canonicalize raw report text.
///
/// Lowercases, folds ñ→n, unifies barangay-marker spellings as whole words,
/// strips everything outside `[a-z0-9 ]`, collapses whitespace runs, trims.
/// Pure function — the result is never mutated in place downstream.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('ñ', "n");

    // Marker canonicalization runs before punctuation stripping so that
    // boundary detection still sees the original separators ("brg.9").
    let unified = brgy_variant_re().replace_all(&lowered, "brgy");
    let unified = barangay_variant_re().replace_all(&unified, "barangay");

    let stripped: String = unified
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into word tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
