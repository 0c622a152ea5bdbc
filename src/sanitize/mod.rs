//! Model Sanitization
//!
//! Numerical hygiene for state loaded from a store.
//!
//! JSON cannot encode NaN or infinity, but a custom store backend can hand
//! back anything. Loaded models are repaired before use so that every later
//! score and update stays finite.

use crate::model::LogisticModel;

/// Check whether the model carries any NaN or infinite parameter
pub fn has_invalid_values(model: &LogisticModel) -> bool {
    model.bias.is_nan()
        || model.bias.is_infinite()
        || model
            .weights
            .values()
            .any(|w| w.is_nan() || w.is_infinite())
}

/// Replace non-finite weights and bias with 0
///
/// Returns the number of values repaired.
pub fn sanitize_model(model: &mut LogisticModel) -> usize {
    let mut repaired = 0;

    if model.bias.is_nan() || model.bias.is_infinite() {
        model.bias = 0.0;
        repaired += 1;
    }

    for weight in model.weights.values_mut() {
        if weight.is_nan() || weight.is_infinite() {
            *weight = 0.0;
            repaired += 1;
        }
    }

    repaired
}
