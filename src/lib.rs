//! # motivez-algo - Preference learning core for the Motivez feed
//!
//! This crate turns a stream of swipe feedback into a personalized ordering
//! of the activity card feed:
//!
//! - **Feedback tally** - per-vibe like/skip counters with an additive score
//! - **Logistic model** - one weight per vibe plus a bias, trained online by
//!   one gradient step per swipe
//! - **Ranking** - stable descending sort of candidate items by predicted
//!   preference
//! - **Persistence** - write-through storage of both records behind a small
//!   key-value trait, with in-memory and JSON-file backends
//!
//! ## Design goals
//!
//! - **Session-scoped** - one engine per user session, no global state
//! - **Crash-tolerant** - unreadable or malformed stored state degrades to
//!   defaults with a warning; preference learning never blocks the feed
//! - **Testable** - the store boundary is a trait, so every behavior is
//!   checkable against an in-memory fake
//!
//! ## Module structure
//!
//! - [`engine`] - session engine (record, score, rank, reset)
//! - [`tally`] - per-vibe feedback counters
//! - [`model`] - logistic scorer and its online update
//! - [`ranking`] - the `Vibed` item trait and stable ranking
//! - [`store`] - persistence trait, error type, and backends
//! - [`sanitize`] - repair of non-finite loaded model parameters
//! - [`types`] - shared types and constants
//!
//! ## Usage example
//!
//! ```rust
//! # fn main() -> Result<(), motivez_algo::StoreError> {
//! use motivez_algo::{MemoryStore, PreferenceEngine};
//!
//! let mut engine = PreferenceEngine::new(MemoryStore::new());
//!
//! // One liked swipe on a card tagged outdoor + music.
//! engine.record_feedback(&["outdoor".to_string(), "music".to_string()], true)?;
//!
//! let p = engine.predict_preference(&["outdoor".to_string()]);
//! assert!(p > 0.5);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod engine;
pub mod model;
pub mod ranking;
pub mod sanitize;
pub mod store;
pub mod tally;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export shared types and constants
pub use types::*;

/// Re-export the session engine
pub use engine::PreferenceEngine;

/// Re-export the feedback tally
pub use tally::FeedbackTally;

/// Re-export the logistic model
pub use model::{sigmoid, LogisticModel};

/// Re-export ranking entry points
pub use ranking::{rank_by_preference, score_items, Vibed};

/// Re-export the persistence boundary
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, StoreResult};
