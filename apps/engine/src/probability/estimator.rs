//! Probability synthesis — combines match evidence, outcome history, and
//! the user's emotional state into a bounded success estimate with
//! explainable factors.

use crate::config::EngineConfig;
use crate::models::pattern::{
    ConfidenceFactor, EvidenceStrength, RiskFactor, SimilarityMatch, SuccessProbability,
};
use crate::models::user::{EmotionalState, MotivationLevel, UserProfile};

pub struct ProbabilityEstimator {
    config: EngineConfig,
}

impl ProbabilityEstimator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Deterministic: identical inputs always produce identical output.
    /// An empty match set is a soft condition and degrades to
    /// weak-evidence defaults rather than failing.
    pub fn estimate(
        &self,
        user: &UserProfile,
        state: &EmotionalState,
        matches: &[SimilarityMatch],
    ) -> SuccessProbability {
        let total = matches.len();
        let successful: Vec<&SimilarityMatch> = matches
            .iter()
            .filter(|m| m.concrete_outcomes.offer_received)
            .collect();

        // Outcome evidence: plain success rate plus a similarity-weighted
        // rate that lets close matches count for more.
        let base_probability = successful.len() as f64 / total.max(1) as f64;
        let weighted_probability = matches
            .iter()
            .filter(|m| m.concrete_outcomes.offer_received)
            .map(|m| m.similarity_score)
            .sum::<f64>()
            / total.max(1) as f64;

        let raw = base_probability * 0.4 + weighted_probability * 0.6;

        let mut probability = (raw * self.emotional_multiplier(state))
            .clamp(self.config.probability_floor, self.config.probability_ceiling);

        let mut risk_factors = Vec::new();

        // Experience-gap penalty against the target-role requirement.
        let required = required_experience_years(&user.target_role);
        let gap = (required - user.experience_years).max(0.0);
        if gap > 2.0 {
            probability = (probability * self.config.experience_gap_penalty)
                .clamp(self.config.probability_floor, self.config.probability_ceiling);
            risk_factors.push(RiskFactor::ExperienceGap);
        }

        if state.stress_level > 0.8 {
            risk_factors.push(RiskFactor::HighStressLevel);
        }

        let mut confidence_factors = Vec::new();
        if matches.iter().any(|m| m.similarity_score > 0.8) {
            confidence_factors.push(ConfidenceFactor::HighSimilarityMatches);
        }
        if state.motivation_level == MotivationLevel::High {
            confidence_factors.push(ConfidenceFactor::PositiveEmotionalState);
        }
        if user.skills.len() >= 3 {
            confidence_factors.push(ConfidenceFactor::StrongSkillSet);
        }

        let timeline_estimate_days = if successful.is_empty() {
            self.config.default_timeline_days
        } else {
            let sum: u64 = successful
                .iter()
                .map(|m| u64::from(m.concrete_outcomes.timeline_to_offer))
                .sum();
            (sum / successful.len() as u64) as u32
        };

        let evidence_strength = if total >= 3 && probability > 0.6 {
            EvidenceStrength::Strong
        } else if total >= 1 && probability > 0.3 {
            EvidenceStrength::Moderate
        } else {
            EvidenceStrength::Weak
        };

        let improvement_actions = if probability < 0.3 {
            build_improvement_actions(user, gap)
        } else {
            Vec::new()
        };

        SuccessProbability {
            overall_probability: probability,
            confidence_factors,
            risk_factors,
            timeline_estimate_days,
            evidence_strength,
            improvement_actions,
        }
    }

    /// Each emotional condition adjusts the multiplier at most once.
    fn emotional_multiplier(&self, state: &EmotionalState) -> f64 {
        let m = &self.config.multipliers;
        let mut multiplier = 1.0;

        if state.stress_level > 0.7 {
            multiplier *= m.high_stress;
        }
        match state.motivation_level {
            MotivationLevel::High => multiplier *= m.high_motivation,
            MotivationLevel::Low => multiplier *= m.low_motivation,
            MotivationLevel::Medium => {}
        }
        if state.confidence_level > 0.7 {
            multiplier *= m.high_confidence;
        } else if state.confidence_level < 0.3 {
            multiplier *= m.low_confidence;
        }

        multiplier
    }
}

/// Heuristic years-of-experience requirement read off the target-role
/// title. Most senior keyword wins, so "Senior Director" resolves to the
/// director requirement.
fn required_experience_years(target_role: &str) -> f64 {
    let title = target_role.to_lowercase();
    if title.contains("director") {
        10.0
    } else if title.contains("lead") {
        7.0
    } else if title.contains("manager") {
        5.0
    } else if title.contains("senior") {
        5.0
    } else {
        3.0
    }
}

fn build_improvement_actions(user: &UserProfile, experience_gap: f64) -> Vec<String> {
    let mut actions = Vec::new();

    if user.skills.len() < 3 {
        actions.push(format!(
            "Add 2-3 in-demand skills for {} roles to your toolkit",
            user.target_role
        ));
    } else {
        actions.push(format!(
            "Deepen one of your strongest skills with a visible project aimed at {} work",
            user.target_role
        ));
    }

    if experience_gap > 2.0 {
        actions.push(format!(
            "Close the experience gap: target stretch responsibilities now — {} typically asks for ~{:.0} more years",
            user.target_role, experience_gap
        ));
    }

    actions.push(format!(
        "Consider an intermediate step between {} and {} to build a stronger case",
        user.current_role, user.target_role
    ));

    actions
}
