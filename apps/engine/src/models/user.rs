use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable per-request snapshot of the job seeker's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub current_role: String,
    pub experience_years: f64,
    pub target_role: String,
    pub target_industry: String,
    pub skills: Vec<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MotivationLevel {
    Low,
    Medium,
    High,
}

/// Self-reported emotional signals. Read-only within the engine.
///
/// Stress and confidence originate from imprecise self-report, so
/// out-of-range values are clamped to [0, 1] rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionalState {
    pub stress_level: f64,
    pub motivation_level: MotivationLevel,
    pub confidence_level: f64,
    pub last_updated: DateTime<Utc>,
}

impl EmotionalState {
    pub fn new(
        stress_level: f64,
        motivation_level: MotivationLevel,
        confidence_level: f64,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            stress_level: stress_level.clamp(0.0, 1.0),
            motivation_level,
            confidence_level: confidence_level.clamp(0.0, 1.0),
            last_updated,
        }
    }

    /// Clamps signals back into range after deserialization from
    /// untrusted self-report payloads.
    pub fn clamped(mut self) -> Self {
        self.stress_level = self.stress_level.clamp(0.0, 1.0);
        self.confidence_level = self.confidence_level.clamp(0.0, 1.0);
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    Office,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerGoals {
    pub target_salary: f64,
    pub location_preference: String,
    pub work_style: WorkStyle,
    pub timeline: String,
}
