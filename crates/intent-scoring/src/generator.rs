//! Synthetic signal generation for demos and tests.
//!
//! Not part of the scoring contract: real signals come from event
//! ingestion. This produces plausible signal lists straight from the
//! catalog so the engine can be exercised without one.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use intent_core::{CatalogError, IntentSignal, SignalCatalog, SignalCategory};

/// Parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of signals to produce.
    pub count: usize,
    /// Signals are timestamped uniformly within this many days before `now`.
    pub window_days: i64,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 25,
            window_days: 30,
            seed: None,
        }
    }
}

/// Generate a synthetic signal list from the catalog.
///
/// Categories are drawn uniformly from the full catalog; each signal's
/// `raw_score` comes from the catalog the same way a real recording would,
/// so the catalog's unknown-category policy applies.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownCategory`] if a drawn category is missing
/// from the weight table under the `Error` policy.
pub fn generate_signals(
    catalog: &SignalCatalog,
    config: &GeneratorConfig,
    now: DateTime<Utc>,
) -> Result<Vec<IntentSignal>, CatalogError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let window_minutes = config.window_days.saturating_mul(24 * 60).max(0);
    let mut signals = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let category = SignalCategory::ALL[rng.random_range(0..SignalCategory::ALL.len())];
        let offset = rng.random_range(0..=window_minutes);
        let timestamp = now - Duration::minutes(offset);
        signals.push(IntentSignal::record(category, timestamp, None, catalog)?);
    }

    tracing::debug!(
        count = signals.len(),
        window_days = config.window_days,
        seeded = config.seed.is_some(),
        "generated synthetic signals"
    );

    Ok(signals)
}
