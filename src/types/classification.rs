//! Classification verdict types: DisasterType, UrgencyLevel, GateSignals,
//! LocationMatch, Classification

use serde::{Deserialize, Serialize};

// ============================================================================
// Disaster Type
// ============================================================================

/// Category of disaster detected in a report.
///
/// The variant order is the fixed type-bucket scan order used by the
/// classifier: the first bucket reaching the highest phrase-hit count wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DisasterType {
    Flood,
    Fire,
    Landslide,
    Typhoon,
    Earthquake,
    /// Power outages, downed lines, electrical hazards
    Power,
    Medical,
    /// Admitted as a disaster but no type bucket scored a hit
    #[default]
    Other,
}

impl std::fmt::Display for DisasterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisasterType::Flood => write!(f, "Flood"),
            DisasterType::Fire => write!(f, "Fire"),
            DisasterType::Landslide => write!(f, "Landslide"),
            DisasterType::Typhoon => write!(f, "Typhoon"),
            DisasterType::Earthquake => write!(f, "Earthquake"),
            DisasterType::Power => write!(f, "Power"),
            DisasterType::Medical => write!(f, "Medical"),
            DisasterType::Other => write!(f, "Other"),
        }
    }
}

// ============================================================================
// Urgency
// ============================================================================

/// Urgency band for an admitted disaster report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    #[default]
    Moderate = 1,
    High = 2,
    Critical = 3,
}

impl UrgencyLevel {
    /// Map a bounded urgency score (0-100) to its band.
    ///
    /// `>= 70` is CRITICAL, `35..70` is HIGH, everything below is MODERATE.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            UrgencyLevel::Critical
        } else if score >= 35 {
            UrgencyLevel::High
        } else {
            UrgencyLevel::Moderate
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyLevel::Moderate => write!(f, "MODERATE"),
            UrgencyLevel::High => write!(f, "HIGH"),
            UrgencyLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ============================================================================
// Admission & Signals
// ============================================================================

/// Which rule admitted the report as a disaster
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPath {
    /// Combined hazard/impact evidence cleared the gate (`gate_score >= 3`)
    EvidenceGate,
    /// Hazard mentioned without impact or negation — admitted for monitoring
    HazardMonitoring,
}

/// Raw evidence tallies behind an admission decision.
///
/// Kept on the result for transparency — dashboards can show *why* a report
/// was admitted the same way advisory tickets carry their trigger values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GateSignals {
    /// `2*hazard_hits + 3*impact_hits - negation_penalty`
    pub gate_score: i32,
    /// Distinct hazard phrases present
    pub hazard_hits: u32,
    /// Distinct impact/need phrases present
    pub impact_hits: u32,
    /// +2 per hazard/impact phrase negated within the preceding window
    pub negation_penalty: u32,
}

// ============================================================================
// Location
// ============================================================================

/// A resolved report location.
///
/// `found_specific` is false only for the city-wide fallback pin — every
/// strategy that matched a named place or numeric barangay sets it true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationMatch {
    /// Display label, e.g. "Barangay 9-A, Lipa City" or "Sabang, Lipa City"
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub found_specific: bool,
}

// ============================================================================
// Classification Result
// ============================================================================

/// Full assessment of an admitted disaster report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisasterAssessment {
    pub disaster_type: DisasterType,
    pub urgency: UrgencyLevel,
    /// Bounded urgency score in 0-100
    pub urgency_score: u8,
    /// Bounded confidence in 80.00-99.99, rounded to two decimals
    pub confidence: f64,
    /// Rule that admitted this report
    pub admission: AdmissionPath,
    pub location: LocationMatch,
    /// Evidence tallies behind the admission decision
    pub signals: GateSignals,
}

/// Verdict for one report text.
///
/// Tagged so that disaster-only fields exist exactly when the report was
/// admitted — there is no "sometimes-present" field to probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Classification {
    NotDisaster,
    Disaster(DisasterAssessment),
}

impl Classification {
    pub fn is_disaster(&self) -> bool {
        matches!(self, Classification::Disaster(_))
    }

    /// The assessment, when the report was admitted
    pub fn assessment(&self) -> Option<&DisasterAssessment> {
        match self {
            Classification::Disaster(a) => Some(a),
            Classification::NotDisaster => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_bands() {
        assert_eq!(UrgencyLevel::from_score(0), UrgencyLevel::Moderate);
        assert_eq!(UrgencyLevel::from_score(34), UrgencyLevel::Moderate);
        assert_eq!(UrgencyLevel::from_score(35), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_score(69), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::from_score(70), UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::from_score(100), UrgencyLevel::Critical);
    }

    #[test]
    fn test_urgency_ordering() {
        assert!(UrgencyLevel::Critical > UrgencyLevel::High);
        assert!(UrgencyLevel::High > UrgencyLevel::Moderate);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(format!("{}", UrgencyLevel::Critical), "CRITICAL");
        assert_eq!(format!("{}", DisasterType::Power), "Power");
    }

    #[test]
    fn test_classification_serde_tag() {
        let not = serde_json::to_value(&Classification::NotDisaster).unwrap();
        assert_eq!(not["verdict"], "not_disaster");

        let assessment = DisasterAssessment {
            disaster_type: DisasterType::Fire,
            urgency: UrgencyLevel::Critical,
            urgency_score: 88,
            confidence: 94.21,
            admission: AdmissionPath::EvidenceGate,
            location: LocationMatch {
                label: "Sabang, Lipa City".to_string(),
                lat: 13.936,
                lon: 121.170,
                found_specific: true,
            },
            signals: GateSignals {
                gate_score: 8,
                hazard_hits: 1,
                impact_hits: 2,
                negation_penalty: 0,
            },
        };
        let yes = serde_json::to_value(&Classification::Disaster(assessment.clone())).unwrap();
        assert_eq!(yes["verdict"], "disaster");
        assert_eq!(yes["disaster_type"], "Fire");
        assert_eq!(yes["urgency"], "CRITICAL");

        let back: Classification = serde_json::from_value(yes).unwrap();
        assert_eq!(back.assessment(), Some(&assessment));
    }
}
