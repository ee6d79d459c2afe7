//! Gazetteer — validated index over the static place table
//!
//! The table itself is data (`places.rs`); this module builds the lookup
//! structures the location resolver needs and enforces the table invariants
//! at startup. A malformed entry is a fatal configuration error, detected
//! once when the gazetteer is built — never per request.

mod places;

pub use places::{
    PlaceSpec, CITY_CENTER_LABEL, CITY_CENTER_LAT, CITY_CENTER_LON, CITY_NAME, LIPA_PLACES,
    POBLACION_DISTRICT_LABEL,
};

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::text::normalize;
use crate::types::LocationMatch;

/// Coordinate sanity bounds — the table must stay inside Batangas province.
const LAT_RANGE: std::ops::RangeInclusive<f64> = 13.5..=14.3;
const LON_RANGE: std::ops::RangeInclusive<f64> = 120.8..=121.6;

/// Validation failures in the static place table
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("gazetteer key '{0}' is not in normalized form")]
    UnnormalizedKey(String),
    #[error("duplicate gazetteer key '{0}'")]
    DuplicateKey(String),
    #[error("alias '{alias}' maps to both '{first}' and '{second}'")]
    AliasCollision {
        alias: String,
        first: String,
        second: String,
    },
    #[error("gazetteer entry '{key}': {reason}")]
    MalformedEntry { key: String, reason: String },
}

/// One place with its resolved alias set
#[derive(Debug, Clone)]
pub struct GazetteerEntry {
    pub key: String,
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub aliases: Vec<String>,
}

impl GazetteerEntry {
    /// Location match pointing at this place
    pub fn to_match(&self) -> LocationMatch {
        LocationMatch {
            label: self.label.clone(),
            lat: self.lat,
            lon: self.lon,
            found_specific: true,
        }
    }
}

/// Validated, indexed place table
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
    /// Canonical keys and aliases → entry index
    by_phrase: HashMap<String, usize>,
    /// First byte of each known phrase → (phrase, entry index), for fuzzy pruning
    by_first_byte: HashMap<u8, Vec<(String, usize)>>,
}

impl Gazetteer {
    /// Build the Lipa City gazetteer from the static table.
    pub fn lipa_city() -> Result<Self, GazetteerError> {
        Self::build(LIPA_PLACES)
    }

    /// Build and validate a gazetteer from a place table.
    pub fn build(places: &[PlaceSpec]) -> Result<Self, GazetteerError> {
        let mut entries = Vec::with_capacity(places.len());
        let mut by_phrase: HashMap<String, usize> = HashMap::new();
        let mut by_first_byte: HashMap<u8, Vec<(String, usize)>> = HashMap::new();

        for spec in places {
            if !spec.lat.is_finite()
                || !spec.lon.is_finite()
                || !LAT_RANGE.contains(&spec.lat)
                || !LON_RANGE.contains(&spec.lon)
            {
                return Err(GazetteerError::MalformedEntry {
                    key: spec.key.to_string(),
                    reason: format!("coordinates ({}, {}) out of range", spec.lat, spec.lon),
                });
            }
            if spec.key.is_empty() || normalize(spec.key) != spec.key {
                return Err(GazetteerError::UnnormalizedKey(spec.key.to_string()));
            }

            let index = entries.len();
            entries.push(GazetteerEntry {
                key: spec.key.to_string(),
                label: spec.label.to_string(),
                lat: spec.lat,
                lon: spec.lon,
                aliases: spec.aliases.iter().map(|a| normalize(a)).collect(),
            });

            let entry: &GazetteerEntry = &entries[index];
            let mut phrases = vec![entry.key.clone()];
            phrases.extend(entry.aliases.iter().cloned());

            for phrase in phrases {
                if let Some(&existing) = by_phrase.get(&phrase) {
                    if phrase == entry.key && entries[existing].key == phrase {
                        return Err(GazetteerError::DuplicateKey(phrase));
                    }
                    return Err(GazetteerError::AliasCollision {
                        first: entries[existing].key.clone(),
                        second: entry.key.clone(),
                        alias: phrase,
                    });
                }
                by_phrase.insert(phrase.clone(), index);
                if let Some(&first) = phrase.as_bytes().first() {
                    by_first_byte.entry(first).or_default().push((phrase, index));
                }
            }
        }

        debug!(
            places = entries.len(),
            phrases = by_phrase.len(),
            "Gazetteer built"
        );

        Ok(Self {
            entries,
            by_phrase,
            by_first_byte,
        })
    }

    /// Exact lookup of a normalized key or alias.
    pub fn lookup(&self, phrase: &str) -> Option<&GazetteerEntry> {
        self.by_phrase.get(phrase).map(|&i| &self.entries[i])
    }

    /// All known phrases (canonical keys and aliases) with their entries.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &GazetteerEntry)> {
        self.by_phrase
            .iter()
            .map(move |(phrase, &i)| (phrase.as_str(), &self.entries[i]))
    }

    /// Phrases starting with the given byte, for fuzzy candidate pruning.
    pub fn phrases_with_first_byte(&self, first: u8) -> &[(String, usize)] {
        self.by_first_byte
            .get(&first)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entry(&self, index: usize) -> Option<&GazetteerEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// City-wide fallback pin — the only match with `found_specific = false`.
    pub fn city_center(&self) -> LocationMatch {
        LocationMatch {
            label: CITY_CENTER_LABEL.to_string(),
            lat: CITY_CENTER_LAT,
            lon: CITY_CENTER_LON,
            found_specific: false,
        }
    }

    /// Generic district pin for a bare "poblacion" mention.
    pub fn poblacion_district(&self) -> LocationMatch {
        LocationMatch {
            label: POBLACION_DISTRICT_LABEL.to_string(),
            lat: CITY_CENTER_LAT,
            lon: CITY_CENTER_LON,
            found_specific: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_table_is_valid() {
        let gazetteer = Gazetteer::lipa_city().unwrap();
        assert!(gazetteer.len() > 40);
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let gazetteer = Gazetteer::lipa_city().unwrap();
        let entry = gazetteer.lookup("marauoy").unwrap();
        assert_eq!(entry.key, "marawoy");
        assert_eq!(entry.label, "Marawoy, Lipa City");
    }

    #[test]
    fn test_unknown_phrase() {
        let gazetteer = Gazetteer::lipa_city().unwrap();
        assert!(gazetteer.lookup("makati").is_none());
    }

    #[test]
    fn test_first_byte_index_covers_all_phrases() {
        let gazetteer = Gazetteer::lipa_city().unwrap();
        let indexed: usize = (0u8..=255)
            .map(|b| gazetteer.phrases_with_first_byte(b).len())
            .sum();
        assert_eq!(indexed, gazetteer.phrases().count());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let places = [
            PlaceSpec { key: "sabang", label: "Sabang", lat: 13.9, lon: 121.1, aliases: &[] },
            PlaceSpec { key: "sabang", label: "Sabang Again", lat: 13.9, lon: 121.1, aliases: &[] },
        ];
        assert!(matches!(
            Gazetteer::build(&places),
            Err(GazetteerError::DuplicateKey(_))
        ));
    }

    #[test]
    fn test_alias_collision_rejected() {
        let places = [
            PlaceSpec { key: "sabang", label: "Sabang", lat: 13.9, lon: 121.1, aliases: &["dalampasigan"] },
            PlaceSpec { key: "tambo", label: "Tambo", lat: 13.9, lon: 121.1, aliases: &["dalampasigan"] },
        ];
        assert!(matches!(
            Gazetteer::build(&places),
            Err(GazetteerError::AliasCollision { .. })
        ));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let places = [PlaceSpec { key: "nowhere", label: "Nowhere", lat: 0.0, lon: 0.0, aliases: &[] }];
        assert!(matches!(
            Gazetteer::build(&places),
            Err(GazetteerError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn test_unnormalized_key_rejected() {
        let places = [PlaceSpec { key: "Sabang!", label: "Sabang", lat: 13.9, lon: 121.1, aliases: &[] }];
        assert!(matches!(
            Gazetteer::build(&places),
            Err(GazetteerError::UnnormalizedKey(_))
        ));
    }

    #[test]
    fn test_city_center_is_unspecific() {
        let gazetteer = Gazetteer::lipa_city().unwrap();
        let center = gazetteer.city_center();
        assert!(!center.found_specific);
        assert_eq!(center.label, CITY_CENTER_LABEL);
    }
}
