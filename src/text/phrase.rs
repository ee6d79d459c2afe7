//! Word-boundary-safe phrase matching over tokenized report text
//!
//! Vocabularies are plain data (slices of normalized phrases); the matching
//! here is tokenized scanning, so a multi-word phrase matches across any
//! amount of whitespace and never as a substring of a longer word. Swapping
//! in a different matching algorithm later only touches this module.

/// Tokens that negate a hazard/impact phrase when they appear shortly before it
pub const NEGATION_TOKENS: &[&str] = &["hindi", "di", "wala", "not", "no", "never"];

/// How many tokens before a phrase are scanned for a negation token
pub const DEFAULT_NEGATION_WINDOW: usize = 3;

/// Find the token index where `phrase` first matches as a whole-word sequence.
fn phrase_position(tokens: &[&str], phrase: &str) -> Option<usize> {
    let needle: Vec<&str> = phrase.split_whitespace().collect();
    if needle.is_empty() || needle.len() > tokens.len() {
        return None;
    }
    tokens
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
}

/// Whether `phrase` occurs as a whole-word match in the token stream.
pub fn has_phrase(tokens: &[&str], phrase: &str) -> bool {
    phrase_position(tokens, phrase).is_some()
}

/// Number of phrases from `set` present — each counted once regardless of
/// how many times it repeats.
pub fn count_phrases(tokens: &[&str], set: &[&str]) -> u32 {
    set.iter()
        .filter(|phrase| has_phrase(tokens, phrase))
        .count() as u32
}

/// Whether any phrase from `set` is present.
pub fn any_phrase(tokens: &[&str], set: &[&str]) -> bool {
    set.iter().any(|phrase| has_phrase(tokens, phrase))
}

/// Whether a negation token appears among the `window` tokens immediately
/// preceding the first occurrence of `phrase`.
///
/// Suppresses false hazard signals like "hindi baha" (not a flood).
pub fn negated_nearby(tokens: &[&str], phrase: &str, window: usize) -> bool {
    let Some(start) = phrase_position(tokens, phrase) else {
        return false;
    };
    let from = start.saturating_sub(window);
    tokens[from..start]
        .iter()
        .any(|token| NEGATION_TOKENS.contains(token))
}
