//! Engine configuration — operator-tunable TOML values
//!
//! Every tunable that was previously a hardcoded constant is a field here.
//! Each struct implements `Default` with values matching those constants,
//! so behavior is unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a deployment.
///
/// Load with `EngineConfig::load()` which searches:
/// 1. `$ALERTIFY_CONFIG` env var
/// 2. `./alertify.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Location resolver tuning
    #[serde(default)]
    pub locator: LocatorConfig,

    /// Live fan-out tuning
    #[serde(default)]
    pub broadcast: BroadcastConfig,

    /// Confidence jitter tuning
    #[serde(default)]
    pub confidence: ConfidenceConfig,
}

/// Fuzzy location matching tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Enable the fuzzy chunk-matching fallback strategy
    #[serde(default = "default_fuzzy_enabled")]
    pub fuzzy_enabled: bool,

    /// Similarity cutoff when a barangay marker token is present.
    /// A marker is strong evidence a place name follows, so more typo
    /// tolerance is justified.
    #[serde(default = "default_cutoff_with_marker")]
    pub fuzzy_cutoff_with_marker: f64,

    /// Similarity cutoff when no marker token is present
    #[serde(default = "default_cutoff_without_marker")]
    pub fuzzy_cutoff_without_marker: f64,

    /// Skip candidates whose length differs from the chunk by more than this
    #[serde(default = "default_max_len_gap")]
    pub fuzzy_max_len_gap: usize,
}

/// Broadcast fan-out tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastConfig {
    /// Bounded capacity of each subscriber channel
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Receive timeout before a keep-alive is due, in seconds
    #[serde(default = "default_receive_timeout_secs")]
    pub receive_timeout_secs: u64,
}

/// Confidence jitter tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Half-width of the uniform jitter added to the confidence base.
    /// Cosmetic entropy only — never feeds any decision.
    #[serde(default = "default_jitter_span")]
    pub jitter_span: f64,
}

fn default_fuzzy_enabled() -> bool {
    true
}
fn default_cutoff_with_marker() -> f64 {
    0.70
}
fn default_cutoff_without_marker() -> f64 {
    0.84
}
fn default_max_len_gap() -> usize {
    7
}
fn default_channel_capacity() -> usize {
    500
}
fn default_receive_timeout_secs() -> u64 {
    20
}
fn default_jitter_span() -> f64 {
    2.65
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            fuzzy_enabled: default_fuzzy_enabled(),
            fuzzy_cutoff_with_marker: default_cutoff_with_marker(),
            fuzzy_cutoff_without_marker: default_cutoff_without_marker(),
            fuzzy_max_len_gap: default_max_len_gap(),
        }
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            receive_timeout_secs: default_receive_timeout_secs(),
        }
    }
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            jitter_span: default_jitter_span(),
        }
    }
}

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$ALERTIFY_CONFIG` environment variable
    /// 2. `./alertify.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("ALERTIFY_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded engine config from ALERTIFY_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from ALERTIFY_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "ALERTIFY_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("alertify.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded engine config from ./alertify.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./alertify.toml, using defaults");
                }
            }
        }

        info!("No alertify.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every field, collecting all problems before failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let cutoff_range = 0.0..=1.0;
        if !cutoff_range.contains(&self.locator.fuzzy_cutoff_with_marker) {
            errors.push(format!(
                "locator.fuzzy_cutoff_with_marker must be in [0, 1], got {}",
                self.locator.fuzzy_cutoff_with_marker
            ));
        }
        if !cutoff_range.contains(&self.locator.fuzzy_cutoff_without_marker) {
            errors.push(format!(
                "locator.fuzzy_cutoff_without_marker must be in [0, 1], got {}",
                self.locator.fuzzy_cutoff_without_marker
            ));
        }
        if self.locator.fuzzy_cutoff_with_marker > self.locator.fuzzy_cutoff_without_marker {
            errors.push(
                "locator.fuzzy_cutoff_with_marker must not exceed fuzzy_cutoff_without_marker \
                 (a marker token justifies looser matching, not stricter)"
                    .to_string(),
            );
        }
        if self.locator.fuzzy_max_len_gap == 0 {
            errors.push("locator.fuzzy_max_len_gap must be at least 1".to_string());
        }
        if self.broadcast.channel_capacity == 0 {
            errors.push("broadcast.channel_capacity must be at least 1".to_string());
        }
        if self.broadcast.receive_timeout_secs == 0 {
            errors.push("broadcast.receive_timeout_secs must be at least 1".to_string());
        }
        if !self.confidence.jitter_span.is_finite() || self.confidence.jitter_span < 0.0 {
            errors.push(format!(
                "confidence.jitter_span must be a non-negative number, got {}",
                self.confidence.jitter_span
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration loading failures — fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
    #[error("invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[locator]\nfuzzy_enabled = false").unwrap();

        let config = EngineConfig::load_from_file(file.path()).unwrap();
        assert!(!config.locator.fuzzy_enabled);
        // Untouched sections keep their defaults
        assert_eq!(config.broadcast.channel_capacity, 500);
        assert!((config.confidence.jitter_span - 2.65).abs() < 1e-9);
    }

    #[test]
    fn test_validation_collects_every_error() {
        let mut config = EngineConfig::default();
        config.locator.fuzzy_cutoff_with_marker = 1.4;
        config.broadcast.channel_capacity = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_inverted_cutoffs_rejected() {
        let mut config = EngineConfig::default();
        config.locator.fuzzy_cutoff_with_marker = 0.9;
        config.locator.fuzzy_cutoff_without_marker = 0.6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "locator = 12").unwrap();
        assert!(matches!(
            EngineConfig::load_from_file(file.path()),
            Err(ConfigError::Parse(_, _))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            EngineConfig::load_from_file(Path::new("/nonexistent/alertify.toml")),
            Err(ConfigError::Io(_, _))
        ));
    }
}
