//! Prompt personalization — merges user context into a template, adapts
//! it to the user's emotional state, and scores the result.

use rand::Rng;

use crate::emotional::classifier::EmotionalAssessment;
use crate::emotional::content::soften_prompt;
use crate::models::prompt::{ContextMap, ContextValue, PersonalizedPrompt, PromptTemplate};
use crate::models::user::{CareerGoals, EmotionalState, UserProfile};
use crate::prompts::interpolator::interpolate;

/// Builds the flat context map a template is filled from: profile
/// fields, goals, caller extras, then the recommended tone. Later
/// entries win, except the tone, which always reflects the classifier.
pub fn build_context(
    profile: &UserProfile,
    goals: Option<&CareerGoals>,
    extras: &ContextMap,
    assessment: &EmotionalAssessment,
) -> ContextMap {
    let mut context = ContextMap::new();

    context.insert(
        "current_role".to_string(),
        ContextValue::from(profile.current_role.clone()),
    );
    context.insert(
        "target_role".to_string(),
        ContextValue::from(profile.target_role.clone()),
    );
    context.insert(
        "target_industry".to_string(),
        ContextValue::from(profile.target_industry.clone()),
    );
    context.insert(
        "experience_years".to_string(),
        ContextValue::Number(profile.experience_years),
    );
    if !profile.skills.is_empty() {
        context.insert(
            "skills".to_string(),
            ContextValue::from(profile.skills.join(", ")),
        );
    }
    if let Some(education) = &profile.education {
        context.insert("education".to_string(), ContextValue::from(education.clone()));
    }

    if let Some(goals) = goals {
        context.insert(
            "target_salary".to_string(),
            ContextValue::Number(goals.target_salary),
        );
        context.insert(
            "location_preference".to_string(),
            ContextValue::from(goals.location_preference.clone()),
        );
        context.insert(
            "work_style".to_string(),
            ContextValue::from(format!("{:?}", goals.work_style).to_lowercase()),
        );
        context.insert("timeline".to_string(), ContextValue::from(goals.timeline.clone()));
    }

    for (key, value) in extras {
        context.insert(key.clone(), value.clone());
    }

    context.insert(
        "tone".to_string(),
        ContextValue::from(format!("{:?}", assessment.recommended_tone).to_lowercase()),
    );

    context
}

/// Fills the template from context, softens it for high-stress users,
/// and scores personalization and expected effectiveness.
pub fn personalize_prompt<R: Rng>(
    template: &PromptTemplate,
    profile: &UserProfile,
    goals: Option<&CareerGoals>,
    extras: &ContextMap,
    state: &EmotionalState,
    assessment: &EmotionalAssessment,
    rng: &mut R,
) -> PersonalizedPrompt {
    let context = build_context(profile, goals, extras, assessment);

    let filled = interpolate(template.template, &context);
    let generated_prompt = soften_prompt(&filled, assessment.stress_bucket, rng);

    PersonalizedPrompt {
        personalization_score: personalization_score(template, &context),
        expected_effectiveness: expected_effectiveness(template, &context, state),
        generated_prompt,
        context_data: context,
    }
}

/// Fraction of the template's declared variables the context filled.
/// A template declaring no variables counts as fully personalized:
/// nothing was left unfilled.
pub fn personalization_score(template: &PromptTemplate, context: &ContextMap) -> f64 {
    if template.variables.is_empty() {
        return 1.0;
    }
    let filled = template
        .variables
        .iter()
        .filter(|var| context.contains_key(**var))
        .count();
    filled as f64 / template.variables.len() as f64
}

/// Base effectiveness plus additive context bonuses, amplified for
/// confident users, capped at 1.0.
pub fn expected_effectiveness(
    template: &PromptTemplate,
    context: &ContextMap,
    state: &EmotionalState,
) -> f64 {
    let mut effectiveness = template.effectiveness_score;

    if context.contains_key("current_role") && context.contains_key("target_role") {
        effectiveness += 0.1;
    }
    if context.contains_key("target_industry") {
        effectiveness += 0.05;
    }
    if context.contains_key("skills") {
        effectiveness += 0.05;
    }

    let confidence_multiplier = if state.confidence_level > 0.7 { 1.1 } else { 1.0 };
    (effectiveness * confidence_multiplier).min(1.0)
}
