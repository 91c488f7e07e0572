//! Scoring pipeline orchestration.

use chrono::{DateTime, Utc};

use intent_core::{IntentScore, IntentSignal};

use crate::cache::ScoreCache;
use crate::error::ScoringError;
use crate::scorer::compute_intent_score;
use crate::trend::with_trend;

/// Score one lead, memoizing the result for the session.
///
/// 1. Return the cached snapshot if this lead was already scored (the cache
///    is invalidated only by an explicit [`ScoreCache::clear`]).
/// 2. Otherwise reduce `signals` into a fresh score.
/// 3. Apply the trend comparison against `previous` (a snapshot the caller
///    retrieved from wherever it persists history).
/// 4. Store the result under `lead_id` and return it.
///
/// # Errors
///
/// Returns [`ScoringError`] if any signal fails validation. Nothing is
/// cached for the lead in that case.
pub fn score_lead(
    cache: &mut ScoreCache,
    lead_id: &str,
    signals: &[IntentSignal],
    previous: Option<&IntentScore>,
    now: DateTime<Utc>,
) -> Result<IntentScore, ScoringError> {
    if let Some(cached) = cache.get(lead_id) {
        tracing::debug!(lead = lead_id, total = cached.total, "score cache hit");
        return Ok(cached.clone());
    }

    let score = with_trend(compute_intent_score(signals, now)?, previous);

    tracing::info!(
        lead = lead_id,
        total = score.total,
        level = %score.level,
        trend = %score.trend,
        signals = score.signal_count,
        "computed intent score"
    );

    cache.put(lead_id, score.clone());
    Ok(score)
}
