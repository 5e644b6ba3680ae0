use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile snapshot of the person behind a recorded success pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternProfile {
    pub previous_role: String,
    pub experience_years: f64,
    pub skills: Vec<String>,
}

/// The path the person took from search to outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPath {
    pub key_actions: Vec<String>,
    pub timeline: String,
    pub obstacles_overcome: Vec<String>,
    pub critical_moments: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerMatch {
    pub company_type: String,
    pub role: String,
    pub culture_fit_factors: Vec<String>,
}

/// Outcome facts. `timeline_to_offer` is days; `salary_achieved` is only
/// meaningful when `offer_received` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteOutcomes {
    pub offer_received: bool,
    pub salary_achieved: f64,
    pub timeline_to_offer: u32,
    pub company_name: String,
}

/// Immutable historical record of a person who progressed through a job
/// search to a concrete outcome. Seeded offline; read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPattern {
    pub id: Uuid,
    pub user_profile: PatternProfile,
    pub success_path: SuccessPath,
    pub employer_match: EmployerMatch,
    pub concrete_outcomes: ConcreteOutcomes,
}

/// A scored pairing of the user against one pattern. Derived per request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub pattern_id: Uuid,
    pub similarity_score: f64,
    pub key_similarities: Vec<String>,
    pub success_path: SuccessPath,
    pub concrete_outcomes: ConcreteOutcomes,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStrength {
    Weak,
    Moderate,
    Strong,
}

/// Signals that pushed the probability up, surfaced for transparency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceFactor {
    HighSimilarityMatches,
    PositiveEmotionalState,
    StrongSkillSet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    HighStressLevel,
    ExperienceGap,
}

/// Calibrated success estimate with its supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessProbability {
    pub overall_probability: f64,
    pub confidence_factors: Vec<ConfidenceFactor>,
    pub risk_factors: Vec<RiskFactor>,
    pub timeline_estimate_days: u32,
    pub evidence_strength: EvidenceStrength,
    pub improvement_actions: Vec<String>,
}
