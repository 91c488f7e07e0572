//! Derived score snapshot types: level, trend, breakdown, and the
//! `IntentScore` value returned by the score calculator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::SignalType;

/// Total at or above which a lead is classified `High`.
pub const HIGH_THRESHOLD: f64 = 70.0;
/// Total at or above which a lead is classified `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// Coarse classification of an intent total.
///
/// Ordered: `None < Low < Medium < High`, so a higher total never maps to
/// a lower level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentLevel {
    None,
    Low,
    Medium,
    High,
}

impl IntentLevel {
    /// Classify a clamped total using the fixed thresholds: `>= 70` high,
    /// `>= 40` medium, `> 0` low, otherwise none.
    #[must_use]
    pub fn from_total(total: f64) -> Self {
        if total >= HIGH_THRESHOLD {
            IntentLevel::High
        } else if total >= MEDIUM_THRESHOLD {
            IntentLevel::Medium
        } else if total > 0.0 {
            IntentLevel::Low
        } else {
            IntentLevel::None
        }
    }
}

impl std::fmt::Display for IntentLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntentLevel::None => write!(f, "none"),
            IntentLevel::Low => write!(f, "low"),
            IntentLevel::Medium => write!(f, "medium"),
            IntentLevel::High => write!(f, "high"),
        }
    }
}

/// Direction of change between two score snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Raw-score subtotal per type bucket over the signal set considered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentScoreBreakdown {
    pub engagement: f64,
    pub behavioral: f64,
    pub external: f64,
}

impl IntentScoreBreakdown {
    /// Add a contribution to the bucket for `signal_type`.
    pub fn add(&mut self, signal_type: SignalType, amount: f64) {
        match signal_type {
            SignalType::Engagement => self.engagement += amount,
            SignalType::Behavioral => self.behavioral += amount,
            SignalType::External => self.external += amount,
        }
    }

    /// Unclamped sum across all buckets.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.engagement + self.behavioral + self.external
    }
}

/// Aggregate intent snapshot for one lead, recomputed on demand.
///
/// Owned by the caller that requested it; the engine persists nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    /// Clamped to `[0, 100]`.
    pub total: f64,
    pub level: IntentLevel,
    pub breakdown: IntentScoreBreakdown,
    /// Direction against a caller-supplied previous snapshot; `Stable`
    /// until a trend comparison is applied.
    pub trend: Trend,
    pub trend_percent: f64,
    pub signal_count: usize,
    pub calculated_at: DateTime<Utc>,
}
