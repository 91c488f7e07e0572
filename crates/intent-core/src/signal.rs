use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{SignalCatalog, SignalCategory, SignalType};
use crate::error::CatalogError;

/// One observed lead interaction event.
///
/// Signals are immutable once recorded. `raw_score` is the catalog weight
/// at recording time; later weight changes never rescore history.
/// `metadata` is free-form context and never affects scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentSignal {
    pub id: String,
    pub category: SignalCategory,
    /// Type bucket, derived from `category` at recording time.
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub timestamp: DateTime<Utc>,
    pub raw_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl IntentSignal {
    /// Record a new signal: generates a UUID id, derives the type bucket
    /// from the category, and copies the current catalog weight into
    /// `raw_score`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] if the catalog has no
    /// weight for `category` under the `Error` policy.
    pub fn record(
        category: SignalCategory,
        timestamp: DateTime<Utc>,
        metadata: Option<serde_json::Value>,
        catalog: &SignalCatalog,
    ) -> Result<Self, CatalogError> {
        let raw_score = catalog.weight_of(category)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            category,
            signal_type: category.signal_type(),
            timestamp,
            raw_score,
            metadata,
        })
    }

    /// Whether the stored type bucket matches what the category implies.
    ///
    /// Signals built with [`IntentSignal::record`] are always consistent;
    /// deserialized signals may not be.
    #[must_use]
    pub fn type_matches_category(&self) -> bool {
        self.signal_type == self.category.signal_type()
    }
}
