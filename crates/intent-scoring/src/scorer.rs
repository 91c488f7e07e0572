//! Weighted intent score calculator.

use chrono::{DateTime, Utc};

use intent_core::{IntentLevel, IntentScore, IntentScoreBreakdown, IntentSignal, Trend};

use crate::error::ScoringError;

/// Reduce a signal list into an aggregate [`IntentScore`].
///
/// The caller filters to one lead (and a time window, if any) before
/// calling; the calculator never looks up leads. Each signal's `raw_score`
/// is summed into its type bucket, the grand total is clamped to
/// `[0, 100]`, and the level is classified with the fixed thresholds in
/// `intent-core` (`>= 70` high, `>= 40` medium, `> 0` low, else none).
///
/// Duplicate signal ids are NOT deduplicated; deduplication is the
/// caller's responsibility. The trend fields of the result are `Stable` /
/// `0.0` until a comparison is applied (see [`crate::trend::compute_trend`]).
///
/// `calculated_at` is the injected clock value; the computation itself is
/// pure and deterministic given identical input.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidSignal`] if any signal has a non-finite
/// `raw_score` or a stored type bucket that does not match its category.
pub fn compute_intent_score(
    signals: &[IntentSignal],
    calculated_at: DateTime<Utc>,
) -> Result<IntentScore, ScoringError> {
    let mut breakdown = IntentScoreBreakdown::default();
    for signal in signals {
        validate_signal(signal)?;
        breakdown.add(signal.signal_type, signal.raw_score);
    }

    let total = breakdown.sum().clamp(0.0, 100.0);

    Ok(IntentScore {
        total,
        level: IntentLevel::from_total(total),
        breakdown,
        trend: Trend::Stable,
        trend_percent: 0.0,
        signal_count: signals.len(),
        calculated_at,
    })
}

fn validate_signal(signal: &IntentSignal) -> Result<(), ScoringError> {
    if !signal.raw_score.is_finite() {
        return Err(ScoringError::InvalidSignal {
            id: signal.id.clone(),
            reason: "raw_score is not finite".to_string(),
        });
    }
    if !signal.type_matches_category() {
        return Err(ScoringError::InvalidSignal {
            id: signal.id.clone(),
            reason: format!(
                "type '{}' does not match category '{}'",
                signal.signal_type, signal.category
            ),
        });
    }
    Ok(())
}
