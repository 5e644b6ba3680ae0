//! Pattern matching — scores the corpus, filters noise, and returns the
//! strongest evidence for the user's situation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::matching::similarity::{compute_similarity, explain_similarity};
use crate::models::pattern::{SimilarityMatch, SuccessPattern};
use crate::models::user::UserProfile;
use crate::storage::patterns::PatternRepository;

/// Ranked matches plus a human message for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub patterns: Vec<SimilarityMatch>,
    pub message: String,
}

pub struct PatternMatcher {
    repository: Arc<dyn PatternRepository>,
    config: EngineConfig,
}

impl PatternMatcher {
    pub fn new(repository: Arc<dyn PatternRepository>, config: EngineConfig) -> Self {
        Self { repository, config }
    }

    /// Loads the corpus and ranks it against the user. Never fails on an
    /// empty corpus — that is a neutral result, not an error.
    pub async fn find_matches(&self, user: &UserProfile) -> Result<MatchResult, EngineError> {
        let patterns = self.repository.load_all().await?;
        Ok(self.rank(user, &patterns))
    }

    /// Pure ranking over an already-loaded corpus. Each pattern is scored
    /// independently; the stable sort keeps ties in corpus order so the
    /// result is deterministic regardless of evaluation order.
    pub fn rank(&self, user: &UserProfile, patterns: &[SuccessPattern]) -> MatchResult {
        let mut scored: Vec<SimilarityMatch> = patterns
            .iter()
            .map(|pattern| SimilarityMatch {
                pattern_id: pattern.id,
                similarity_score: compute_similarity(user, pattern, &self.config.similarity),
                key_similarities: explain_similarity(user, pattern, &self.config.similarity),
                success_path: pattern.success_path.clone(),
                concrete_outcomes: pattern.concrete_outcomes.clone(),
            })
            .filter(|m| m.similarity_score > self.config.match_threshold)
            .collect();

        scored.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.config.max_matches);

        debug!(
            "ranked {} patterns, kept {} above threshold {}",
            patterns.len(),
            scored.len(),
            self.config.match_threshold
        );

        let message = build_match_message(&scored);
        MatchResult {
            patterns: scored,
            message,
        }
    }
}

fn build_match_message(matches: &[SimilarityMatch]) -> String {
    match matches.first() {
        Some(top) => format!(
            "We found {} people who started where you are — one of them landed at {}.",
            matches.len(),
            top.concrete_outcomes.company_name
        ),
        None => "We're still analyzing paths similar to yours — check back soon.".to_string(),
    }
}
