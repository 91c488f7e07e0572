//! Domain types and configuration for lead intent scoring.
//!
//! Holds the signal catalog (the closed set of tracked activities and their
//! point weights), the `IntentSignal` event type, the derived `IntentScore`
//! snapshot types, and environment-driven application configuration. The
//! scoring computations themselves live in `intent-scoring`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod score;
pub mod signal;

pub use catalog::{
    load_weights, SignalCatalog, SignalCategory, SignalType, UnknownCategoryPolicy, WeightsFile,
    DEFAULT_WEIGHTS,
};
pub use config::{load_app_config, load_app_config_from_env, AppConfig};
pub use error::{CatalogError, ConfigError};
pub use score::{
    IntentLevel, IntentScore, IntentScoreBreakdown, Trend, HIGH_THRESHOLD, MEDIUM_THRESHOLD,
};
pub use signal::IntentSignal;
