//! Preference Ranking
//!
//! Orders candidate items by the model's predicted preference for their vibe
//! tags. The sort is stable and descending: equally scored items keep their
//! original relative order.

use std::cmp::Ordering;

use crate::model::LogisticModel;

/// Implemented by anything carrying vibe tags
///
/// The ranker only reads the tag list; items stay opaque otherwise.
pub trait Vibed {
    /// Vibe tags for this item, in declaration order
    fn vibes(&self) -> &[String];
}

impl<T: Vibed + ?Sized> Vibed for &T {
    fn vibes(&self) -> &[String] {
        (**self).vibes()
    }
}

/// Predicted preference for each item, in input order
pub fn score_items<T: Vibed>(model: &LogisticModel, items: &[T]) -> Vec<f64> {
    items.iter().map(|item| model.predict(item.vibes())).collect()
}

/// Sort items descending by predicted preference
///
/// Every item is scored once up front; the model is not consulted during the
/// sort itself. Ties keep their input order.
pub fn rank_by_preference<T: Vibed>(model: &LogisticModel, items: Vec<T>) -> Vec<T> {
    let mut scored: Vec<(f64, T)> = items
        .into_iter()
        .map(|item| (model.predict(item.vibes()), item))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(_, item)| item).collect()
}

// ==================== Unit Tests ====================
