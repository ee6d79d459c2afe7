//! Location Resolution Engine
//!
//! Resolves a location mention in free text to a canonical place with
//! coordinates. Strategies run in strict priority order and the first hit
//! wins — exact numeric and phrase matches are unambiguous and go first,
//! fuzzy matching is a last resort gated by a marker-aware cutoff:
//!
//! 1. Numeric barangay pattern ("brgy 9", "barangay 9-a", "bg9a")
//! 2. Longest exact gazetteer key/alias match
//! 3. Generic "poblacion" district fallback
//! 4. Fuzzy chunk matching (config-gated)
//! 5. City-center fallback pin

use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::config::LocatorConfig;
use crate::gazetteer::{Gazetteer, CITY_NAME};
use crate::text::{has_phrase, normalize, similarity_ratio, tokenize};
use crate::types::LocationMatch;

/// Whole-word barangay-marker variant followed by a 1-2 digit number and an
/// optional letter suffix, attached forms included ("bg9a").
const NUMERIC_BARANGAY_PATTERN: &str =
    r"\b(?:barangay|brgy|bgy|bg)\s*([1-9][0-9]?)(?:\s*([a-d]))?\b";

/// Marker tokens whose presence loosens the fuzzy cutoff
const MARKER_TOKENS: &[&str] = &["barangay", "brgy", "bgy", "bg"];

/// Tokens skipped when building fuzzy candidate chunks: connectors,
/// politeness and generic urgency words that never start a place name.
const CHUNK_STOPWORDS: &[&str] = &[
    "sa", "ng", "na", "po", "ang", "mga", "may", "dito", "diyan", "doon", "yung", "ung", "kay",
    "si", "at", "ay", "pa", "lang", "daw", "raw", "naman", "kami", "kayo", "tayo", "ako", "kita",
    "nasa", "malapit", "banda", "tulong", "saklolo", "please", "pls", "help", "asap", "urgent",
    "grabe", "sobra", "ngayon", "kanina", "agad",
];

/// Spaced n-gram lengths tried for fuzzy chunks, longest first
const SPACED_NGRAM_LENGTHS: &[usize] = &[4, 3, 2, 1];

/// Concatenated (no-space) n-gram lengths tried for fuzzy chunks
const JOINED_NGRAM_LENGTHS: &[usize] = &[3, 2];

/// Resolves report text to a canonical place + coordinates
pub struct LocationResolver {
    gazetteer: Gazetteer,
    numeric_re: Regex,
    fuzzy: LocatorConfig,
}

impl LocationResolver {
    pub fn new(gazetteer: Gazetteer, fuzzy: LocatorConfig) -> Self {
        Self {
            gazetteer,
            numeric_re: Regex::new(NUMERIC_BARANGAY_PATTERN).expect("built-in numeric pattern"),
            fuzzy,
        }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Resolve the location mentioned in raw report text.
    ///
    /// Never fails: text with no resolvable mention yields the city-center
    /// pin with `found_specific = false`.
    pub fn locate(&self, raw: &str) -> LocationMatch {
        let text = normalize(raw);
        let tokens = tokenize(&text);

        if let Some(found) = self.match_numeric_barangay(&text) {
            debug!(label = %found.label, "Location via numeric barangay pattern");
            return found;
        }
        if let Some(found) = self.match_longest_exact(&tokens) {
            debug!(label = %found.label, "Location via exact gazetteer match");
            return found;
        }
        if tokens.contains(&"poblacion") {
            debug!("Location via generic poblacion district");
            return self.gazetteer.poblacion_district();
        }
        if self.fuzzy.fuzzy_enabled {
            if let Some(found) = self.match_fuzzy(&tokens) {
                debug!(label = %found.label, "Location via fuzzy chunk match");
                return found;
            }
        }

        self.gazetteer.city_center()
    }

    /// Strategy 1: numeric barangay mention.
    ///
    /// The label always names the barangay; coordinates prefer the
    /// "poblacion barangay N" entry, then a bare "barangay N" alias, then
    /// the city center.
    fn match_numeric_barangay(&self, text: &str) -> Option<LocationMatch> {
        let captures = self.numeric_re.captures(text)?;
        let number = captures.get(1)?.as_str();
        let suffix = captures.get(2).map(|m| m.as_str());

        let label = match suffix {
            Some(s) => format!("Barangay {number}-{}, {CITY_NAME}", s.to_uppercase()),
            None => format!("Barangay {number}, {CITY_NAME}"),
        };

        let mut keys = Vec::with_capacity(4);
        if let Some(s) = suffix {
            keys.push(format!("poblacion barangay {number} {s}"));
            keys.push(format!("barangay {number} {s}"));
        }
        keys.push(format!("poblacion barangay {number}"));
        keys.push(format!("barangay {number}"));

        let (lat, lon) = keys
            .iter()
            .find_map(|key| self.gazetteer.lookup(key))
            .map_or_else(
                || {
                    let center = self.gazetteer.city_center();
                    (center.lat, center.lon)
                },
                |entry| (entry.lat, entry.lon),
            );

        Some(LocationMatch {
            label,
            lat,
            lon,
            found_specific: true,
        })
    }

    /// Strategy 2: longest exact whole-word key/alias match.
    ///
    /// Longest by character count, so "san sebastian" beats a shorter
    /// accidental collision inside the same text.
    fn match_longest_exact(&self, tokens: &[&str]) -> Option<LocationMatch> {
        self.gazetteer
            .phrases()
            .filter(|(phrase, _)| has_phrase(tokens, phrase))
            .max_by_key(|(phrase, _)| phrase.len())
            .map(|(_, entry)| entry.to_match())
    }

    /// Strategy 4: fuzzy chunk matching against all known phrases.
    fn match_fuzzy(&self, tokens: &[&str]) -> Option<LocationMatch> {
        let cutoff = if tokens.iter().any(|t| MARKER_TOKENS.contains(t)) {
            self.fuzzy.fuzzy_cutoff_with_marker
        } else {
            self.fuzzy.fuzzy_cutoff_without_marker
        };

        let mut best_ratio = 0.0f64;
        let mut best_index: Option<usize> = None;

        for chunk in candidate_chunks(tokens) {
            let Some(&first) = chunk.as_bytes().first() else {
                continue;
            };
            for (phrase, index) in self.gazetteer.phrases_with_first_byte(first) {
                if phrase.len().abs_diff(chunk.len()) > self.fuzzy.fuzzy_max_len_gap {
                    continue;
                }
                let ratio = similarity_ratio(&chunk, phrase);
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best_index = Some(*index);
                }
            }
        }

        if best_ratio >= cutoff {
            let entry = best_index.and_then(|i| self.gazetteer.entry(i))?;
            debug!(key = %entry.key, ratio = best_ratio, cutoff, "Fuzzy match accepted");
            Some(entry.to_match())
        } else {
            None
        }
    }
}

/// Candidate chunks for fuzzy matching: stopword-filtered token n-grams,
/// space-joined (lengths 4,3,2,1) and concatenated (lengths 3,2), deduplicated
/// in first-seen order.
fn candidate_chunks(tokens: &[&str]) -> Vec<String> {
    let kept: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !CHUNK_STOPWORDS.contains(t))
        .collect();

    let mut seen = HashSet::new();
    let mut chunks = Vec::new();
    let mut push = |chunk: String| {
        if !chunk.is_empty() && seen.insert(chunk.clone()) {
            chunks.push(chunk);
        }
    };

    for &n in SPACED_NGRAM_LENGTHS {
        for window in kept.windows(n) {
            push(window.join(" "));
        }
    }
    for &n in JOINED_NGRAM_LENGTHS {
        for window in kept.windows(n) {
            push(window.concat());
        }
    }

    chunks
}
