//! Disaster Classification Engine
//!
//! Deterministic, model-free verdict pipeline for one report text:
//!
//! 1. Noise prefilter (banter/commerce with no real evidence is dropped)
//! 2. Evidence gate: hazard and impact phrase tallies with negation penalty
//! 3. Admission: evidence gate, or hazard-only "monitoring" path
//! 4. Type detection over fixed ordered buckets
//! 5. Location resolution on the original raw text
//! 6. Urgency scoring with saturating exponential compression
//! 7. Bounded confidence with injected cosmetic jitter
//!
//! The engine never fails: empty or non-matching input yields
//! `Classification::NotDisaster`.

mod entropy;
pub mod vocab;

pub use entropy::{EntropySource, FixedEntropy, ThreadRngEntropy};

use regex::Regex;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::gazetteer::{Gazetteer, GazetteerError};
use crate::locate::LocationResolver;
use crate::text::{
    any_phrase, count_phrases, has_phrase, negated_nearby, normalize, tokenize,
    DEFAULT_NEGATION_WINDOW,
};
use crate::types::{
    AdmissionPath, Classification, DisasterAssessment, DisasterType, GateSignals, LocationMatch,
    UrgencyLevel,
};
use vocab::{
    COLLAPSE_BOOST_CUES, CRITICAL_CUES, FIRE_BOOST_CUES, FLOOD_BOOST_CUES, HAZARD_SETS,
    HIGH_CUES, IMPACT_SETS, INTENSITY_CUES, MEDICAL_BOOST_CUES, MODERATE_CUES, NOISE_CUES,
    TYPE_BUCKETS,
};

// ============================================================================
// Scoring Constants
// ============================================================================

/// Gate weight per distinct hazard phrase
const HAZARD_WEIGHT: i32 = 2;
/// Gate weight per distinct impact phrase
const IMPACT_WEIGHT: i32 = 3;
/// Gate penalty per negated hazard/impact phrase
const NEGATION_PENALTY_STEP: u32 = 2;
/// Minimum gate score for full admission
const GATE_THRESHOLD: i32 = 3;

/// Urgency weights per cue class
const CRITICAL_CUE_WEIGHT: i64 = 26;
const HIGH_CUE_WEIGHT: i64 = 14;
const MODERATE_CUE_WEIGHT: i64 = 3;
const INTENSITY_CUE_WEIGHT: i64 = 8;
/// Bonus when a headcount ("20 pamilya", "5 people") is given
const HEADCOUNT_BONUS: i64 = 12;
/// Gate-score contribution cap
const GATE_CONTRIBUTION_CAP: i64 = 26;
/// Bonus for a specifically resolved location
const SPECIFIC_LOCATION_BONUS: i64 = 4;
/// Saturation constant for the exponential score compression
const URGENCY_SATURATION: f64 = 48.0;

/// Type-specific urgency boosters
const FIRE_BOOST: i64 = 18;
const FLOOD_BOOST: i64 = 16;
const COLLAPSE_BOOST: i64 = 12;
const MEDICAL_BOOST: i64 = 22;

/// Confidence floor/ceiling
const CONFIDENCE_FLOOR: f64 = 80.0;
const CONFIDENCE_CEILING: f64 = 99.99;

/// Headcount pattern: a number followed by a people/family counter word
const HEADCOUNT_PATTERN: &str =
    r"\b[0-9]+\s+(?:tao|katao|pamilya|family|families|people|persons|residente|residents)\b";

// ============================================================================
// Classifier
// ============================================================================

/// Deterministic disaster report classifier.
///
/// Pure and stateless per call — safe to share across threads and run in
/// parallel over independent inputs.
pub struct DisasterClassifier {
    resolver: LocationResolver,
    entropy: Box<dyn EntropySource>,
    headcount_re: Regex,
    jitter_span: f64,
}

impl DisasterClassifier {
    pub fn new(resolver: LocationResolver, entropy: Box<dyn EntropySource>, jitter_span: f64) -> Self {
        Self {
            resolver,
            entropy,
            headcount_re: Regex::new(HEADCOUNT_PATTERN).expect("built-in headcount pattern"),
            jitter_span,
        }
    }

    /// Build a classifier with the production gazetteer and entropy source.
    pub fn from_config(config: &EngineConfig) -> Result<Self, GazetteerError> {
        let gazetteer = Gazetteer::lipa_city()?;
        let resolver = LocationResolver::new(gazetteer, config.locator.clone());
        Ok(Self::new(
            resolver,
            Box::new(ThreadRngEntropy),
            config.confidence.jitter_span,
        ))
    }

    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    /// Classify one report text — the `ClassifyAndLocate` contract.
    ///
    /// Never fails; empty and non-matching input yields `NotDisaster`.
    pub fn classify(&self, raw: &str) -> Classification {
        let text = normalize(raw);
        if text.is_empty() {
            return Classification::NotDisaster;
        }
        let tokens = tokenize(&text);

        // Evidence tallies; each phrase counts once regardless of repeats
        let mut hazard_hits = 0u32;
        let mut impact_hits = 0u32;
        let mut negation_penalty = 0u32;
        for set in HAZARD_SETS {
            for phrase in *set {
                if has_phrase(&tokens, phrase) {
                    hazard_hits += 1;
                    if negated_nearby(&tokens, phrase, DEFAULT_NEGATION_WINDOW) {
                        negation_penalty += NEGATION_PENALTY_STEP;
                    }
                }
            }
        }
        for set in IMPACT_SETS {
            for phrase in *set {
                if has_phrase(&tokens, phrase) {
                    impact_hits += 1;
                    if negated_nearby(&tokens, phrase, DEFAULT_NEGATION_WINDOW) {
                        negation_penalty += NEGATION_PENALTY_STEP;
                    }
                }
            }
        }

        // Noise prefilter: obvious banter/commerce with a stray hazard word
        // is dropped; genuinely loaded text passes on its evidence.
        if any_phrase(&tokens, NOISE_CUES) && hazard_hits + impact_hits < 2 {
            debug!(hazard_hits, impact_hits, "Noise cue with thin evidence — dropped");
            return Classification::NotDisaster;
        }

        let gate_score = HAZARD_WEIGHT * hazard_hits as i32 + IMPACT_WEIGHT * impact_hits as i32
            - negation_penalty as i32;

        let admission = if gate_score >= GATE_THRESHOLD {
            AdmissionPath::EvidenceGate
        } else if hazard_hits >= 1 && negation_penalty == 0 {
            AdmissionPath::HazardMonitoring
        } else {
            debug!(gate_score, hazard_hits, negation_penalty, "Below gate — not a disaster");
            return Classification::NotDisaster;
        };

        let disaster_type = detect_type(&tokens);
        // Location runs on the original raw text, not the prefiltered form
        let location = self.resolver.locate(raw);

        let signals = GateSignals {
            gate_score,
            hazard_hits,
            impact_hits,
            negation_penalty,
        };

        let urgency_score = self.urgency_score(&text, &tokens, gate_score, disaster_type, &location);
        let urgency = UrgencyLevel::from_score(urgency_score);
        let confidence = self.confidence(gate_score, disaster_type, urgency_score, &location);

        info!(
            %disaster_type,
            %urgency,
            urgency_score,
            confidence,
            gate_score,
            admission = ?admission,
            location = %location.label,
            "Report admitted"
        );

        Classification::Disaster(DisasterAssessment {
            disaster_type,
            urgency,
            urgency_score,
            confidence,
            admission,
            location,
            signals,
        })
    }

    /// Additive urgency evidence mapped through saturating exponential
    /// compression to a bounded 0-100 score.
    fn urgency_score(
        &self,
        text: &str,
        tokens: &[&str],
        gate_score: i32,
        disaster_type: DisasterType,
        location: &LocationMatch,
    ) -> u8 {
        let crit_hits = i64::from(count_phrases(tokens, CRITICAL_CUES));
        let high_hits = i64::from(count_phrases(tokens, HIGH_CUES));
        let moderate_hits = i64::from(count_phrases(tokens, MODERATE_CUES));
        let intensity_hits = i64::from(count_phrases(tokens, INTENSITY_CUES));

        let mut raw = CRITICAL_CUE_WEIGHT * crit_hits
            + HIGH_CUE_WEIGHT * high_hits
            + MODERATE_CUE_WEIGHT * moderate_hits
            + INTENSITY_CUE_WEIGHT * intensity_hits;

        if self.headcount_re.is_match(text) {
            raw += HEADCOUNT_BONUS;
        }
        raw += (3 * i64::from(gate_score)).min(GATE_CONTRIBUTION_CAP);
        if location.found_specific {
            raw += SPECIFIC_LOCATION_BONUS;
        }
        raw += match disaster_type {
            DisasterType::Fire if any_phrase(tokens, FIRE_BOOST_CUES) => FIRE_BOOST,
            DisasterType::Flood if any_phrase(tokens, FLOOD_BOOST_CUES) => FLOOD_BOOST,
            DisasterType::Earthquake | DisasterType::Landslide
                if any_phrase(tokens, COLLAPSE_BOOST_CUES) =>
            {
                COLLAPSE_BOOST
            }
            DisasterType::Medical if any_phrase(tokens, MEDICAL_BOOST_CUES) => MEDICAL_BOOST,
            _ => 0,
        };

        saturating_score(raw)
    }

    /// Bounded confidence: deterministic base plus cosmetic jitter, clamped
    /// to [80.00, 99.99] and rounded to two decimals.
    fn confidence(
        &self,
        gate_score: i32,
        disaster_type: DisasterType,
        urgency_score: u8,
        location: &LocationMatch,
    ) -> f64 {
        let mut base = CONFIDENCE_FLOOR + (1.9 * f64::from(gate_score)).min(12.0);
        if disaster_type != DisasterType::Other {
            base += 3.0;
        }
        base += (f64::from(urgency_score) / 16.0).min(9.0);
        if location.found_specific {
            base += 2.0;
        }

        let jittered = base + self.entropy.jitter(self.jitter_span);
        (jittered.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING) * 100.0).round() / 100.0
    }
}

/// First bucket reaching the strictly highest hit count wins; all-zero
/// means `Other`.
fn detect_type(tokens: &[&str]) -> DisasterType {
    let mut best = DisasterType::Other;
    let mut best_hits = 0u32;
    for (disaster_type, cues) in TYPE_BUCKETS {
        let hits = count_phrases(tokens, cues);
        if hits > best_hits {
            best_hits = hits;
            best = *disaster_type;
        }
    }
    best
}

/// `round(100 * (1 - e^(-raw/48)))` clamped to [0, 100] — monotone in `raw`,
/// saturating so stacked cue hits cannot run away.
fn saturating_score(raw: i64) -> u8 {
    let compressed = 100.0 * (1.0 - (-(raw as f64) / URGENCY_SATURATION).exp());
    compressed.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocatorConfig;

    fn classifier() -> DisasterClassifier {
        let resolver = LocationResolver::new(
            Gazetteer::lipa_city().unwrap(),
            LocatorConfig::default(),
        );
        DisasterClassifier::new(resolver, Box::new(FixedEntropy(0.0)), 2.65)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(classifier().classify(""), Classification::NotDisaster);
        assert_eq!(classifier().classify("   \t  "), Classification::NotDisaster);
    }

    #[test]
    fn test_no_evidence_is_not_disaster() {
        let verdict = classifier().classify("kumusta na kayo diyan");
        assert_eq!(verdict, Classification::NotDisaster);
    }

    #[test]
    fn test_noise_prefilter_drops_banter() {
        // A stray hazard word inside obvious commerce must not alarm
        let verdict = classifier().classify("for sale!! fire sale ng mga damit, murang mura");
        assert_eq!(verdict, Classification::NotDisaster);
    }

    #[test]
    fn test_noise_with_real_evidence_passes() {
        let verdict = classifier().classify("haha grabe may sunog at may nasugatan sa amin");
        assert!(verdict.is_disaster());
    }

    #[test]
    fn test_monitoring_path() {
        let verdict = classifier().classify("umuulan ng malakas dito");
        let assessment = verdict.assessment().expect("admitted");
        assert_eq!(assessment.admission, AdmissionPath::HazardMonitoring);
        assert_eq!(assessment.disaster_type, DisasterType::Typhoon);
    }

    #[test]
    fn test_negated_hazard_not_admitted() {
        let verdict = classifier().classify("hindi baha dito sa amin");
        assert_eq!(verdict, Classification::NotDisaster);
    }

    #[test]
    fn test_type_tie_goes_to_earlier_bucket() {
        // One flood cue and one fire cue — Flood is earlier in the bucket order
        let verdict = classifier().classify("baha at usok sa kanto, tulong");
        let assessment = verdict.assessment().expect("admitted");
        assert_eq!(assessment.disaster_type, DisasterType::Flood);
    }

    #[test]
    fn test_signals_recorded() {
        let verdict = classifier().classify("baha dito, may stranded na pamilya");
        let assessment = verdict.assessment().expect("admitted");
        assert_eq!(assessment.signals.hazard_hits, 1);
        assert_eq!(assessment.signals.impact_hits, 1);
        assert_eq!(assessment.signals.negation_penalty, 0);
        assert_eq!(assessment.signals.gate_score, 5);
    }

    #[test]
    fn test_headcount_pattern() {
        let c = classifier();
        assert!(c.headcount_re.is_match("20 pamilya ang stranded"));
        assert!(c.headcount_re.is_match("may 5 tao sa bubong"));
        assert!(!c.headcount_re.is_match("walang tao dito"));
    }

    #[test]
    fn test_saturating_score_monotone_and_bounded() {
        let mut last = 0u8;
        for raw in 0..400 {
            let score = saturating_score(raw);
            assert!(score >= last);
            assert!(score <= 100);
            last = score;
        }
        assert_eq!(saturating_score(0), 0);
    }

    #[test]
    fn test_confidence_bounds_at_extremes() {
        let resolver = LocationResolver::new(
            Gazetteer::lipa_city().unwrap(),
            LocatorConfig::default(),
        );
        let high = DisasterClassifier::new(resolver, Box::new(FixedEntropy(99.0)), 2.65);
        let verdict =
            high.classify("SAKLOLO baha sunog lindol may stranded injured 50 pamilya sa Sabang");
        let assessment = verdict.assessment().expect("admitted");
        assert!(assessment.confidence <= 99.99);
        assert!(assessment.confidence >= 80.0);
    }
}
