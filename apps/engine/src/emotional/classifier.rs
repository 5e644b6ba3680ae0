//! Emotional-state classification — one assessment per request, reused
//! by both the hope-statement wording and the prompt tone adaptation so
//! the two never drift apart.

use serde::{Deserialize, Serialize};

use crate::models::user::{EmotionalState, MotivationLevel};

/// Narrative tone the downstream content should take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneStyle {
    Encouraging,
    #[default]
    Professional,
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressBucket {
    Low,
    Medium,
    High,
}

/// Single classification consumed by content adaptation and prompt
/// personalization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmotionalAssessment {
    pub stress_bucket: StressBucket,
    pub recommended_tone: ToneStyle,
    pub confidence_boost_needed: bool,
}

/// Maps raw stress/confidence/motivation signals into an assessment.
/// Encouragement wins whenever the user is stressed or low on
/// confidence; directness requires both high confidence and high
/// motivation.
pub fn classify(state: &EmotionalState) -> EmotionalAssessment {
    let stress_bucket = if state.stress_level >= 0.7 {
        StressBucket::High
    } else if state.stress_level >= 0.4 {
        StressBucket::Medium
    } else {
        StressBucket::Low
    };

    let recommended_tone = if state.stress_level >= 0.7 || state.confidence_level < 0.5 {
        ToneStyle::Encouraging
    } else if state.confidence_level >= 0.7 && state.motivation_level == MotivationLevel::High {
        ToneStyle::Direct
    } else {
        ToneStyle::Professional
    };

    EmotionalAssessment {
        stress_bucket,
        recommended_tone,
        confidence_boost_needed: state.confidence_level < 0.5,
    }
}
