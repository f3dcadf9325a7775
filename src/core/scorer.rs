//! Risk Scorer: reduces a classification to a 0-100 fraud-risk score
//!
//! score = min(trunc(intensity × 50 + distinct_flags × 12), 100)
//!
//! Only `overall_emotional_intensity` and `flags` count. Trajectory and
//! the per-emotion breakdown are display-only.

use crate::config::ScoringPolicy;
use crate::types::AnalysisRecord;
use crate::MAX_RISK_SCORE;

/// Absorbs binary rounding error before truncation (0.58 × 50 = 28.999999999999996)
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Deterministic risk scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer {
    policy: ScoringPolicy,
}

impl RiskScorer {
    /// Create scorer with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create scorer with a custom policy
    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Score a validated record. Never fails, never blocks.
    ///
    /// The raw sum is truncated toward zero after adding a 1e-9 tolerance,
    /// so representation error cannot cost a point: intensity 0.58 scores
    /// 29 here where a plain `trunc(0.58 * 50)` gives 28.
    pub fn score(&self, record: &AnalysisRecord) -> u32 {
        let intensity = record.overall_emotional_intensity * self.policy.intensity_points;
        let flags = record.distinct_flags().len() as f64 * self.policy.points_per_flag as f64;
        let raw = (intensity + flags + TRUNCATION_EPSILON).max(0.0);

        // Truncate: never award fractional credit upward
        (raw.trunc() as u32).min(MAX_RISK_SCORE)
    }
}

// =============================================================================
// TESTS
// =============================================================================
