//! Trend analysis between two score snapshots.

use intent_core::{IntentScore, Trend};

/// Direction and percent change derived by [`compute_trend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSummary {
    pub trend: Trend,
    pub trend_percent: f64,
}

/// Compare the current score against a previous snapshot for the same lead.
///
/// No history (`previous` is `None`) reports `Stable` / `0.0` rather than
/// guessing. When the previous total is zero the percent change is defined
/// as `100` if the current total is positive and `0` otherwise; every other
/// case is `delta / previous * 100`, rounded to one decimal place.
#[must_use]
pub fn compute_trend(current: &IntentScore, previous: Option<&IntentScore>) -> TrendSummary {
    let Some(previous) = previous else {
        return TrendSummary {
            trend: Trend::Stable,
            trend_percent: 0.0,
        };
    };

    let delta = current.total - previous.total;
    let trend = if delta > 0.0 {
        Trend::Up
    } else if delta < 0.0 {
        Trend::Down
    } else {
        Trend::Stable
    };

    let trend_percent = if previous.total == 0.0 {
        if current.total > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        round1(delta / previous.total * 100.0)
    };

    TrendSummary {
        trend,
        trend_percent,
    }
}

/// Apply a trend comparison to a freshly computed score.
#[must_use]
pub fn with_trend(mut current: IntentScore, previous: Option<&IntentScore>) -> IntentScore {
    let summary = compute_trend(&current, previous);
    current.trend = summary.trend;
    current.trend_percent = summary.trend_percent;
    current
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
