use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mutable per-user momentum state. Created on the first completed
/// action, updated on each subsequent one; `confidence_trajectory` is
/// append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTracking {
    pub completed_milestones: Vec<String>,
    pub confidence_trajectory: Vec<f64>,
    pub momentum_score: f64,
    pub wins_accumulated: Vec<String>,
    pub next_milestone: String,
    pub updated_at: DateTime<Utc>,
}

/// A user-reported completed action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedAction {
    pub description: String,
    pub outcome: String,
    pub confidence_boost: f64,
}

/// What the tracker hands back after recording one action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub celebration_message: String,
    pub new_confidence: f64,
    pub momentum_score: f64,
    pub progress_percentage: u32,
    pub next_recommended_action: String,
}
