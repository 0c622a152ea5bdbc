//! Logistic Preference Model
//!
//! Single-layer logistic regression over vibe tags, trained online by one
//! gradient step per swipe.
//!
//! Core principles:
//! - One weight per vibe plus a shared bias, all starting at 0
//! - The raw score z sums the weight of every vibe occurrence in the input,
//!   treating missing weights as 0
//! - Feedback maps to a target y in {0, 1}; the update moves bias and the
//!   touched weights against the prediction error
//! - A vibe repeated in one input contributes its weight to z once per
//!   occurrence and receives the gradient step once per occurrence, matching
//!   the tally's per-occurrence counting

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::EPSILON;

// ==================== Scoring ====================

/// Logistic function clamped to the open interval (0, 1)
///
/// Saturated inputs (including infinities) still land strictly inside the
/// interval, at distance `EPSILON` from the boundary.
pub fn sigmoid(z: f64) -> f64 {
    (1.0 / (1.0 + (-z).exp())).clamp(EPSILON, 1.0 - EPSILON)
}

// ==================== Model ====================

/// Per-vibe weights plus a bias, persisted as `{"weights": {...}, "bias": n}`
///
/// Absent fields deserialize to their defaults, so an empty object is a valid
/// untrained model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Weight per vibe, created lazily at 0 on first update
    #[serde(default)]
    pub weights: HashMap<String, f64>,
    /// Shared intercept
    #[serde(default)]
    pub bias: f64,
}

impl LogisticModel {
    /// Create an untrained model (all zeros)
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw linear score: bias plus the weight of every vibe occurrence
    pub fn raw_score(&self, vibes: &[String]) -> f64 {
        let weight_sum: f64 = vibes
            .iter()
            .map(|vibe| self.weights.get(vibe).copied().unwrap_or(0.0))
            .sum();
        self.bias + weight_sum
    }

    /// Predicted preference in (0, 1); higher means stronger affinity
    pub fn predict(&self, vibes: &[String]) -> f64 {
        sigmoid(self.raw_score(vibes))
    }

    /// One online gradient step toward the observed outcome
    ///
    /// An empty vibe list is a no-op. Every occurrence of a vibe in the list
    /// gets its own weight step; missing weights are created at 0 first.
    pub fn train(&mut self, vibes: &[String], liked: bool, learning_rate: f64) {
        if vibes.is_empty() {
            return;
        }

        let target = if liked { 1.0 } else { 0.0 };
        let error = self.predict(vibes) - target;
        let step = learning_rate * error;

        self.bias -= step;
        for vibe in vibes {
            *self.weights.entry(vibe.clone()).or_insert(0.0) -= step;
        }
    }

    /// Weight for one vibe (0 when absent)
    pub fn weight(&self, vibe: &str) -> f64 {
        self.weights.get(vibe).copied().unwrap_or(0.0)
    }

    /// Number of vibes with a weight entry
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when the model has never been trained
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty() && self.bias == 0.0
    }

    /// Drop all weights and zero the bias
    pub fn clear(&mut self) {
        self.weights.clear();
        self.bias = 0.0;
    }
}

// ==================== Unit Tests ====================
