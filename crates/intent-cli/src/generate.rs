//! Generate command handler.

use chrono::Utc;

use intent_core::SignalCatalog;
use intent_scoring::{generate_signals, GeneratorConfig};

/// Emit a synthetic signal array as pretty JSON on stdout.
pub(crate) fn run_generate(
    catalog: &SignalCatalog,
    count: usize,
    seed: Option<u64>,
    window_days: i64,
) -> anyhow::Result<()> {
    let config = GeneratorConfig {
        count,
        window_days,
        seed,
    };
    let signals = generate_signals(catalog, &config, Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&signals)?);
    Ok(())
}
