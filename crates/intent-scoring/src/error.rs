use thiserror::Error;

use intent_core::CatalogError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// A signal failed validation: non-finite `raw_score` or a stored type
    /// bucket that does not match its category.
    #[error("invalid signal '{id}': {reason}")]
    InvalidSignal { id: String, reason: String },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
