//! Score command handler.

use std::path::Path;

use chrono::Utc;

use intent_core::{IntentScore, IntentSignal};
use intent_scoring::{compute_intent_score, with_trend};

/// Score a JSON array of signals, optionally trending against a previous
/// snapshot, and print the resulting score as JSON on stdout.
pub(crate) fn run_score(input: &Path, previous: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(input)
        .map_err(|e| anyhow::anyhow!("failed to read signal file {}: {e}", input.display()))?;
    let signals: Vec<IntentSignal> = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse signal file {}: {e}", input.display()))?;

    let previous_score: Option<IntentScore> = match previous {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                anyhow::anyhow!("failed to read previous score {}: {e}", path.display())
            })?;
            Some(serde_json::from_str(&raw).map_err(|e| {
                anyhow::anyhow!("failed to parse previous score {}: {e}", path.display())
            })?)
        }
        None => None,
    };

    tracing::debug!(
        signals = signals.len(),
        has_previous = previous_score.is_some(),
        "scoring signal file"
    );

    let score = with_trend(
        compute_intent_score(&signals, Utc::now())?,
        previous_score.as_ref(),
    );

    let out = if pretty {
        serde_json::to_string_pretty(&score)?
    } else {
        serde_json::to_string(&score)?
    };
    println!("{out}");

    Ok(())
}
