use thiserror::Error;

use crate::catalog::SignalCategory;

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The category has no entry in the active weight table and the catalog
    /// policy is `Error`.
    #[error("signal category '{0}' is not present in the active weight table")]
    UnknownCategory(SignalCategory),
}

/// Errors from loading application or weights configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read weights file at {path}: {source}")]
    WeightsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse weights file: {0}")]
    WeightsFileParse(#[from] serde_yaml::Error),

    #[error("weights validation failed: {0}")]
    Validation(String),
}
