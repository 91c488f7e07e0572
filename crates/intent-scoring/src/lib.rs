//! Intent scoring engine.
//!
//! Reduces a lead's recorded signals into a weighted aggregate score with a
//! per-type breakdown, classifies it into a coarse level, and compares it
//! against a prior snapshot to derive a trend. Pure and synchronous: no
//! I/O, no hidden clock (the computation timestamp is injected), and no
//! state beyond the optional session cache.

pub mod cache;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod scorer;
pub mod trend;

pub use cache::ScoreCache;
pub use error::ScoringError;
pub use generator::{generate_signals, GeneratorConfig};
pub use pipeline::score_lead;
pub use scorer::compute_intent_score;
pub use trend::{compute_trend, with_trend, TrendSummary};
