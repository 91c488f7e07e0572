//! Session-scoped score memoization, keyed by lead id.

use std::collections::HashMap;

use intent_core::IntentScore;

/// Memoization cache for computed scores within one session.
///
/// Intentionally minimal: no TTL, no size bound, invalidated only by
/// [`ScoreCache::clear`]. Repeated `put` calls for the same lead are
/// last-write-wins; `IntentScore` is an immutable value, so a replaced
/// entry is never partially updated.
#[derive(Debug, Clone, Default)]
pub struct ScoreCache {
    entries: HashMap<String, IntentScore>,
}

impl ScoreCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, lead_id: &str) -> Option<&IntentScore> {
        self.entries.get(lead_id)
    }

    pub fn put(&mut self, lead_id: impl Into<String>, score: IntentScore) {
        self.entries.insert(lead_id.into(), score);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;
    use intent_core::{IntentLevel, IntentScoreBreakdown, Trend};

    fn score_with_total(total: f64) -> IntentScore {
        IntentScore {
            total,
            level: IntentLevel::from_total(total),
            breakdown: IntentScoreBreakdown::default(),
            trend: Trend::Stable,
            trend_percent: 0.0,
            signal_count: 0,
            calculated_at: DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        }
    }

    #[test]
    fn get_on_empty_cache_is_none() {
        let cache = ScoreCache::new();
        assert!(cache.get("lead-1").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn put_then_get_returns_score() {
        let mut cache = ScoreCache::new();
        cache.put("lead-1", score_with_total(37.0));
        assert_eq!(cache.get("lead-1").unwrap().total, 37.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn put_same_lead_is_last_write_wins() {
        let mut cache = ScoreCache::new();
        cache.put("lead-1", score_with_total(37.0));
        cache.put("lead-1", score_with_total(55.0));
        assert_eq!(cache.get("lead-1").unwrap().total, 55.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_all_entries() {
        let mut cache = ScoreCache::new();
        cache.put("lead-1", score_with_total(37.0));
        cache.put("lead-2", score_with_total(70.0));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("lead-1").is_none());
    }
}
