//! Preference Engine
//!
//! Session-scoped owner of the feedback tally and the logistic model, wired
//! to an injected [`PreferenceStore`].
//!
//! Core principles:
//! - State is loaded once at construction; any read failure or malformed
//!   record degrades to defaults with a warning, never an error
//! - Every feedback event is persisted write-through before the call returns
//! - Tally and model updates are atomic with respect to failure: when a write
//!   fails, in-memory state stays at the pre-update snapshot, so memory never
//!   runs ahead of storage
//! - All mutating operations take `&mut self`; sharing an engine across
//!   threads means wrapping it in a lock, which serializes updates

use serde::de::DeserializeOwned;

use crate::model::LogisticModel;
use crate::ranking::{self, Vibed};
use crate::sanitize::sanitize_model;
use crate::store::{PreferenceStore, StoreResult};
use crate::tally::FeedbackTally;
use crate::types::EngineConfig;

// ==================== Engine ====================

/// Converts a stream of (vibes, liked) events into a score function over
/// vibe sets, usable to rank a candidate feed
pub struct PreferenceEngine<S: PreferenceStore> {
    store: S,
    config: EngineConfig,
    tally: FeedbackTally,
    model: LogisticModel,
}

impl<S: PreferenceStore> PreferenceEngine<S> {
    /// Create an engine with the default configuration, loading any persisted
    /// state from the store
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create an engine with a custom configuration
    ///
    /// Missing records start from defaults; unreadable or malformed records
    /// degrade to defaults with a logged warning. Construction never fails.
    pub fn with_config(store: S, config: EngineConfig) -> Self {
        let tally: FeedbackTally = load_record(&store, &config.tally_key);
        let mut model: LogisticModel = load_record(&store, &config.model_key);

        let repaired = sanitize_model(&mut model);
        if repaired > 0 {
            tracing::warn!(repaired, "Replaced non-finite model parameters with zero");
        }

        Self {
            store,
            config,
            tally,
            model,
        }
    }

    // ==================== Feedback ====================

    /// Record one swipe outcome and persist both records
    ///
    /// An empty vibe list is a no-op and touches neither memory nor storage.
    /// On a write failure the in-memory state is left unchanged and the error
    /// is returned; the caller may ignore it, but a subsequent load will not
    /// reflect this event.
    pub fn record_feedback(&mut self, vibes: &[String], liked: bool) -> StoreResult<()> {
        if vibes.is_empty() {
            return Ok(());
        }

        let mut tally = self.tally.clone();
        let mut model = self.model.clone();
        tally.record(vibes, liked);
        model.train(vibes, liked, self.config.learning_rate);

        self.persist(&tally, &model)?;

        self.tally = tally;
        self.model = model;
        Ok(())
    }

    /// Clear all learned state and persist the empty records
    ///
    /// Same failure discipline as [`record_feedback`](Self::record_feedback):
    /// if the write fails, the learned state is kept.
    pub fn reset(&mut self) -> StoreResult<()> {
        let tally = FeedbackTally::new();
        let model = LogisticModel::new();

        self.persist(&tally, &model)?;

        self.tally = tally;
        self.model = model;
        Ok(())
    }

    // ==================== Scoring ====================

    /// Sum of likes minus skips over the given vibes (unseen vibes count 0)
    pub fn compute_additive_score(&self, vibes: &[String]) -> i64 {
        self.tally.additive_score(vibes)
    }

    /// Predicted preference for a vibe set, in (0, 1)
    pub fn predict_preference(&self, vibes: &[String]) -> f64 {
        self.model.predict(vibes)
    }

    /// Predicted preference for each item, in input order
    pub fn score_items<T: Vibed>(&self, items: &[T]) -> Vec<f64> {
        ranking::score_items(&self.model, items)
    }

    /// Sort items descending by predicted preference, ties keeping input order
    pub fn rank_by_preference<T: Vibed>(&self, items: Vec<T>) -> Vec<T> {
        ranking::rank_by_preference(&self.model, items)
    }

    // ==================== Accessors ====================

    /// Current feedback tally
    pub fn tally(&self) -> &FeedbackTally {
        &self.tally
    }

    /// Current logistic model
    pub fn model(&self) -> &LogisticModel {
        &self.model
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gradient step size in use
    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    /// Backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and hand the store back
    pub fn into_store(self) -> S {
        self.store
    }

    // ==================== Persistence ====================

    fn persist(&mut self, tally: &FeedbackTally, model: &LogisticModel) -> StoreResult<()> {
        let tally_json = serde_json::to_string(tally)?;
        let model_json = serde_json::to_string(model)?;

        self.store.set(&self.config.tally_key, &tally_json)?;
        self.store.set(&self.config.model_key, &model_json)?;
        Ok(())
    }
}

/// Load one record, degrading to the default on every failure path
fn load_record<S: PreferenceStore, T: Default + DeserializeOwned>(store: &S, key: &str) -> T {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key, "Stored preference record is malformed, using defaults");
                T::default()
            }
        },
        Ok(None) => {
            tracing::debug!(key, "No stored preference record, starting from defaults");
            T::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, key, "Failed to read preference record, using defaults");
            T::default()
        }
    }
}

// ==================== Unit Tests ====================
