//! Feedback Tally
//!
//! Per-vibe like/skip counters accumulated from the swipe stream.
//!
//! Core principles:
//! - Entries are created lazily on first feedback for a vibe and never removed
//! - Counters are unsigned and only ever incremented
//! - A vibe repeated within one swipe's tag list is counted once per occurrence
//! - The additive score is a cheap interpretable readout, independent of the
//!   trained logistic model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::VibeCounts;

/// Per-vibe feedback counters
///
/// Serializes as the bare vibe-to-counters map, so the persisted record is a
/// plain JSON object like `{"outdoor": {"like": 3, "skip": 1}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackTally {
    counts: HashMap<String, VibeCounts>,
}

impl FeedbackTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one swipe outcome for every vibe in the list
    ///
    /// Each occurrence counts: a vibe listed twice is incremented twice.
    pub fn record(&mut self, vibes: &[String], liked: bool) {
        for vibe in vibes {
            self.counts.entry(vibe.clone()).or_default().record(liked);
        }
    }

    /// Sum of likes minus skips over the given vibes
    ///
    /// Vibes without a tally entry contribute 0. Each occurrence in the input
    /// contributes separately.
    pub fn additive_score(&self, vibes: &[String]) -> i64 {
        vibes
            .iter()
            .map(|vibe| self.counts.get(vibe).map(VibeCounts::net).unwrap_or(0))
            .sum()
    }

    /// Counters for one vibe, if it has been seen
    pub fn get(&self, vibe: &str) -> Option<&VibeCounts> {
        self.counts.get(vibe)
    }

    /// Like count for one vibe (0 when unseen)
    pub fn like_count(&self, vibe: &str) -> u64 {
        self.counts.get(vibe).map(|c| c.like).unwrap_or(0)
    }

    /// Skip count for one vibe (0 when unseen)
    pub fn skip_count(&self, vibe: &str) -> u64 {
        self.counts.get(vibe).map(|c| c.skip).unwrap_or(0)
    }

    /// All counters, keyed by vibe
    pub fn counts(&self) -> &HashMap<String, VibeCounts> {
        &self.counts
    }

    /// Total observations across all vibes
    ///
    /// A swipe carrying several vibes is counted once per vibe.
    pub fn total_observations(&self) -> u64 {
        self.counts.values().map(VibeCounts::total).sum()
    }

    /// Number of distinct vibes seen so far
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no feedback has been recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Drop all counters
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

// ==================== Unit Tests ====================
