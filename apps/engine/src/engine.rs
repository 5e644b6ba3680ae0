//! Engine facade — the request-scoped entry points the API layer calls.
//!
//! Wires the matcher, estimator, classifier, and content adapter into
//! single operations. Collaborators are injected once at construction;
//! every call is otherwise stateless.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::EngineConfig;
use crate::emotional::classifier::{classify, EmotionalAssessment};
use crate::emotional::content::{adapt_content, HopeContent};
use crate::errors::ServiceResponse;
use crate::matching::matcher::PatternMatcher;
use crate::models::pattern::{SimilarityMatch, SuccessProbability};
use crate::models::prompt::{ContextMap, PersonalizedPrompt};
use crate::models::user::{CareerGoals, EmotionalState, UserProfile};
use crate::probability::estimator::ProbabilityEstimator;
use crate::prompts::personalizer;
use crate::prompts::templates::find_template;
use crate::storage::patterns::PatternRepository;

/// Everything one hope request produces: ranked evidence, the
/// calibrated probability, and the adapted narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopeExperience {
    pub message: String,
    pub matches: Vec<SimilarityMatch>,
    pub probability: SuccessProbability,
    pub assessment: EmotionalAssessment,
    pub content: HopeContent,
}

pub struct HopeEngine {
    matcher: PatternMatcher,
    estimator: ProbabilityEstimator,
}

impl HopeEngine {
    pub fn new(patterns: Arc<dyn PatternRepository>, config: EngineConfig) -> Self {
        Self {
            matcher: PatternMatcher::new(patterns, config.clone()),
            estimator: ProbabilityEstimator::new(config),
        }
    }

    /// The main flow: match → estimate → adapt. The emotional state is
    /// classified exactly once and reused everywhere downstream. An
    /// empty corpus degrades to a neutral message with weak evidence;
    /// it is not an error.
    pub async fn generate_hope_experience<R: Rng>(
        &self,
        profile: &UserProfile,
        state: &EmotionalState,
        rng: &mut R,
    ) -> ServiceResponse<HopeExperience> {
        let state = state.clone().clamped();

        let result = match self.matcher.find_matches(profile).await {
            Ok(result) => result,
            Err(err) => return ServiceResponse::err(err),
        };

        let assessment = classify(&state);
        let probability = self.estimator.estimate(profile, &state, &result.patterns);
        let content = adapt_content(&state, &probability, result.patterns.first(), rng);

        info!(
            "hope experience: {} matches, probability {:.2}, tone {:?}",
            result.patterns.len(),
            probability.overall_probability,
            assessment.recommended_tone
        );

        ServiceResponse::ok(HopeExperience {
            message: result.message,
            matches: result.patterns,
            probability,
            assessment,
            content,
        })
    }

    /// Resolves a catalog template and personalizes it for the user.
    pub fn personalize_prompt<R: Rng>(
        &self,
        template_id: &str,
        profile: &UserProfile,
        goals: Option<&CareerGoals>,
        extras: &ContextMap,
        state: &EmotionalState,
        rng: &mut R,
    ) -> ServiceResponse<PersonalizedPrompt> {
        let state = state.clone().clamped();

        let template = match find_template(template_id) {
            Ok(template) => template,
            Err(err) => return ServiceResponse::err(err),
        };

        let assessment = classify(&state);
        let prompt = personalizer::personalize_prompt(
            template,
            profile,
            goals,
            extras,
            &state,
            &assessment,
            rng,
        );
        ServiceResponse::ok(prompt)
    }
}
