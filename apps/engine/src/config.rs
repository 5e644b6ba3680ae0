use serde::{Deserialize, Serialize};

/// Per-dimension similarity weights. Each field is the maximum credit a
/// dimension can contribute; the final score is clamped to [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityWeights {
    pub role_exact: f64,
    pub role_partial: f64,
    pub role_base: f64,
    pub experience_exact: f64,
    pub experience_close: f64,
    pub experience_near: f64,
    pub experience_base: f64,
    pub skills_max: f64,
    pub skills_sparse_credit: f64,
    pub target_exact: f64,
    pub target_partial: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            role_exact: 0.40,
            role_partial: 0.25,
            role_base: 0.10,
            experience_exact: 0.25,
            experience_close: 0.20,
            experience_near: 0.15,
            experience_base: 0.05,
            skills_max: 0.30,
            skills_sparse_credit: 0.10,
            target_exact: 0.20,
            target_partial: 0.10,
        }
    }
}

/// Canonical emotional multiplier table. Each applies at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalMultipliers {
    pub high_stress: f64,
    pub high_motivation: f64,
    pub low_motivation: f64,
    pub high_confidence: f64,
    pub low_confidence: f64,
}

impl Default for EmotionalMultipliers {
    fn default() -> Self {
        Self {
            high_stress: 0.8,
            high_motivation: 1.1,
            low_motivation: 0.8,
            high_confidence: 1.1,
            low_confidence: 0.8,
        }
    }
}

/// Every tunable in the engine. Constructed by the embedding service and
/// passed to components at construction; `Default` is the production
/// calibration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Matches scoring at or below this are noise and dropped.
    pub match_threshold: f64,
    pub max_matches: usize,
    pub similarity: SimilarityWeights,
    pub multipliers: EmotionalMultipliers,
    /// Probability never reaches 0 or 1: always some hope, never certainty.
    pub probability_floor: f64,
    pub probability_ceiling: f64,
    pub experience_gap_penalty: f64,
    /// Timeline fallback when no matched pattern ended in an offer.
    pub default_timeline_days: u32,
    pub momentum_increment: f64,
    pub initial_confidence: f64,
    pub initial_momentum: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.3,
            max_matches: 5,
            similarity: SimilarityWeights::default(),
            multipliers: EmotionalMultipliers::default(),
            probability_floor: 0.05,
            probability_ceiling: 0.95,
            experience_gap_penalty: 0.7,
            default_timeline_days: 120,
            momentum_increment: 0.1,
            initial_confidence: 0.5,
            initial_momentum: 0.5,
        }
    }
}
