//! Broadcast event envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Classification;

/// One classified report, packaged for fan-out to live observers.
///
/// Immutable once built; the broadcaster serializes it exactly once per
/// publish and never mutates it. The `id` is a host-assigned sequence
/// number (the engine does not persist anything).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEvent {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub classification: Classification,
}

impl ReportEvent {
    /// Build an event stamped with the current UTC time.
    pub fn new(id: u64, author: String, content: String, classification: Classification) -> Self {
        Self {
            id,
            author,
            content,
            created_at: Utc::now(),
            classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_flat() {
        let event = ReportEvent::new(
            7,
            "Juan".to_string(),
            "walang pasok bukas".to_string(),
            Classification::NotDisaster,
        );
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["author"], "Juan");
        // Classification fields are flattened into the envelope
        assert_eq!(value["verdict"], "not_disaster");
    }
}
