//! Alertify: Community Disaster Report Triage
//!
//! Deterministic, model-free triage for short free-text situation reports
//! (mixed English/Filipino, heavy typos and slang).
//!
//! ## Architecture
//!
//! - **Text substrate**: normalization, whole-word phrase matching, string
//!   similarity
//! - **Classification Engine**: noise prefilter, evidence gate, type
//!   buckets, urgency scoring, bounded confidence
//! - **Location Engine**: numeric-barangay / exact / district / fuzzy
//!   gazetteer resolution with a city-wide fallback
//! - **Broadcast Fan-out**: bounded, non-blocking delivery of classified
//!   reports to live subscribers

pub mod broadcast;
pub mod classify;
pub mod config;
pub mod gazetteer;
pub mod locate;
pub mod text;
pub mod types;

// Re-export the host-facing surface
pub use broadcast::{BroadcastStats, Broadcaster, RecvOutcome, Subscription};
pub use classify::{DisasterClassifier, EntropySource, FixedEntropy, ThreadRngEntropy};
pub use config::{ConfigError, EngineConfig};
pub use gazetteer::{Gazetteer, GazetteerEntry, GazetteerError};
pub use locate::LocationResolver;
pub use types::{
    AdmissionPath, Classification, DisasterAssessment, DisasterType, GateSignals, LocationMatch,
    ReportEvent, UrgencyLevel,
};
