//! Common Types and Constants
//!
//! Shared data structures used across the preference modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Gradient step size for the online logistic update
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Numerical stability epsilon
pub const EPSILON: f64 = 1e-10;

/// Default storage key for the feedback tally record
pub const DEFAULT_TALLY_KEY: &str = "preference_tally";

/// Default storage key for the logistic model record
pub const DEFAULT_MODEL_KEY: &str = "preference_model";

// ==================== Counter Types ====================

/// Like/skip counters for a single vibe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeCounts {
    /// Number of liked swipes that carried this vibe
    pub like: u64,
    /// Number of skipped swipes that carried this vibe
    pub skip: u64,
}

impl VibeCounts {
    /// Record one swipe outcome
    pub fn record(&mut self, liked: bool) {
        if liked {
            self.like += 1;
        } else {
            self.skip += 1;
        }
    }

    /// Likes minus skips
    pub fn net(&self) -> i64 {
        self.like as i64 - self.skip as i64
    }

    /// Total observations for this vibe
    pub fn total(&self) -> u64 {
        self.like + self.skip
    }
}

// ==================== Configuration ====================

/// Preference engine configuration
///
/// The storage keys are overridable so multiple users or profiles can share
/// one store namespace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Gradient step size applied on every feedback event
    pub learning_rate: f64,
    /// Storage key for the tally record
    pub tally_key: String,
    /// Storage key for the model record
    pub model_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            tally_key: DEFAULT_TALLY_KEY.to_string(),
            model_key: DEFAULT_MODEL_KEY.to_string(),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibe_counts_record() {
        let mut counts = VibeCounts::default();
        assert_eq!(counts.like, 0);
        assert_eq!(counts.skip, 0);

        counts.record(true);
        counts.record(true);
        counts.record(false);

        assert_eq!(counts.like, 2);
        assert_eq!(counts.skip, 1);
    }

    #[test]
    fn test_vibe_counts_net() {
        let counts = VibeCounts { like: 3, skip: 1 };
        assert_eq!(counts.net(), 2);

        let negative = VibeCounts { like: 1, skip: 4 };
        assert_eq!(negative.net(), -3);

        assert_eq!(VibeCounts::default().net(), 0);
    }

    #[test]
    fn test_vibe_counts_total() {
        let counts = VibeCounts { like: 3, skip: 1 };
        assert_eq!(counts.total(), 4);
        assert_eq!(VibeCounts::default().total(), 0);
    }

    #[test]
    fn test_vibe_counts_serde_field_names() {
        let counts = VibeCounts { like: 5, skip: 2 };
        let json = serde_json::to_value(counts).unwrap();
        assert_eq!(json, serde_json::json!({ "like": 5, "skip": 2 }));
    }

    #[test]
    fn test_engine_config_default() {
        let config = EngineConfig::default();
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(config.tally_key, DEFAULT_TALLY_KEY);
        assert_eq!(config.model_key, DEFAULT_MODEL_KEY);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_LEARNING_RATE, 0.1);
        assert!(EPSILON > 0.0);
        assert!(EPSILON < 1e-6);
        assert_ne!(DEFAULT_TALLY_KEY, DEFAULT_MODEL_KEY);
    }
}
