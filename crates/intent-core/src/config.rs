use std::path::PathBuf;

use crate::catalog::UnknownCategoryPolicy;
use crate::error::ConfigError;

/// Application configuration, environment-driven.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Optional YAML weights override; `None` uses the built-in table.
    pub weights_path: Option<PathBuf>,
    pub unknown_category: UnknownCategoryPolicy,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("INTENT_LOG_LEVEL", "info");
    let weights_path = lookup("INTENT_WEIGHTS_PATH").ok().map(PathBuf::from);
    let unknown_category = parse_policy(&or_default("INTENT_UNKNOWN_CATEGORY", "error"))?;

    Ok(AppConfig {
        log_level,
        weights_path,
        unknown_category,
    })
}

/// Parse an unknown-category policy value. Strict: anything other than
/// `error` or `zero` is rejected rather than silently defaulted, since the
/// policy changes scoring outcomes.
fn parse_policy(s: &str) -> Result<UnknownCategoryPolicy, ConfigError> {
    match s {
        "error" => Ok(UnknownCategoryPolicy::Error),
        "zero" => Ok(UnknownCategoryPolicy::ZeroWeight),
        other => Err(ConfigError::InvalidEnvVar {
            var: "INTENT_UNKNOWN_CATEGORY".to_string(),
            reason: format!("expected 'error' or 'zero', got '{other}'"),
        }),
    }
}
