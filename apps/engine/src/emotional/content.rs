//! Content adaptation — selects the hope statement, next action, and
//! prompt softening for the user's emotional state.
//!
//! Statement pools are fixed; which pool entry is used goes through the
//! caller-provided RNG so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::emotional::classifier::StressBucket;
use crate::models::pattern::{SimilarityMatch, SuccessProbability};
use crate::models::user::EmotionalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    Low,
    Medium,
    High,
}

/// The one thing the user should do next, sized to their current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextAction {
    pub description: String,
    pub priority: ActionPriority,
    pub estimated_minutes: u32,
}

/// Adapted narrative output for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopeContent {
    pub hope_statement: String,
    pub next_action: NextAction,
    pub evidence_preview: String,
    pub confidence_boost_expected: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed phrase pools
// ────────────────────────────────────────────────────────────────────────────

const GENTLE_STATEMENTS: &[&str] = &[
    "You're carrying a lot right now, and that's okay. People in your exact position have come through this — one small step today is enough.",
    "This stretch is hard, but it isn't the whole story. Others who stood where you stand found their way forward, and the path is still open to you.",
    "Take a breath. Your situation has worked out for people very much like you, and nothing about today closes that door.",
];

const BALANCED_STATEMENTS: &[&str] = &[
    "You're on a workable path. People with your background have made this exact move, and steady progress is what got them there.",
    "The evidence says this transition is within reach. Keep stacking concrete wins and the odds keep moving your way.",
];

const SUPPORTIVE_PREFIXES: &[&str] = &[
    "No pressure here — ",
    "Whenever you're ready, ",
    "One small step at a time: ",
];

// ────────────────────────────────────────────────────────────────────────────
// Adaptation
// ────────────────────────────────────────────────────────────────────────────

/// Branches on raw stress/confidence to pick statement and action shape:
/// overwhelmed users get a gentle statement and a low-effort action,
/// confident users get an ambitious statement naming their probability,
/// everyone else gets the balanced middle.
pub fn adapt_content<R: Rng>(
    state: &EmotionalState,
    probability: &SuccessProbability,
    top_match: Option<&SimilarityMatch>,
    rng: &mut R,
) -> HopeContent {
    let overwhelmed = state.stress_level > 0.7 || state.confidence_level < 0.3;
    let confident = state.confidence_level > 0.7;

    let (hope_statement, next_action) = if overwhelmed {
        (
            pick(GENTLE_STATEMENTS, rng).to_string(),
            NextAction {
                description:
                    "Take 10 minutes to write down one thing that went well this week — nothing else today."
                        .to_string(),
                priority: ActionPriority::Low,
                estimated_minutes: 10,
            },
        )
    } else if confident {
        (
            format!(
                "You're in a strong position: {:.0}% of paths like yours ended in an offer. Time to move directly.",
                probability.overall_probability * 100.0
            ),
            NextAction {
                description:
                    "Send three tailored applications or direct messages to hiring managers at target companies today."
                        .to_string(),
                priority: ActionPriority::High,
                estimated_minutes: 90,
            },
        )
    } else {
        (
            pick(BALANCED_STATEMENTS, rng).to_string(),
            NextAction {
                description:
                    "Quantify two achievements on your resume with concrete numbers (team size, impact, timeline)."
                        .to_string(),
                priority: ActionPriority::Medium,
                estimated_minutes: 45,
            },
        )
    };

    HopeContent {
        hope_statement,
        next_action,
        evidence_preview: build_evidence_preview(top_match),
        confidence_boost_expected: expected_confidence_boost(
            probability.overall_probability,
            state.confidence_level,
        ),
    }
}

/// Boost is proportional to the probability, amplified for users who
/// need confidence most, and capped at 0.5.
pub fn expected_confidence_boost(probability: f64, confidence_level: f64) -> f64 {
    let amplifier = if confidence_level < 0.5 { 1.5 } else { 1.0 };
    (probability * 0.3 * amplifier).min(0.5)
}

fn build_evidence_preview(top_match: Option<&SimilarityMatch>) -> String {
    match top_match {
        Some(m) if m.concrete_outcomes.offer_received => format!(
            "Someone with your background got an offer from {} in {} days.",
            m.concrete_outcomes.company_name, m.concrete_outcomes.timeline_to_offer
        ),
        Some(m) => format!(
            "We're tracking a path very close to yours ({}% similar) — their story is still unfolding.",
            (m.similarity_score * 100.0).round()
        ),
        None => "As more people share their paths, your evidence gets stronger.".to_string(),
    }
}

/// Tone-specific prompt rewrite: high-stress users get a supportive
/// prefix, and only the first character of the original text is
/// lower-cased — the rest keeps its casing.
pub fn soften_prompt<R: Rng>(text: &str, stress_bucket: StressBucket, rng: &mut R) -> String {
    if stress_bucket != StressBucket::High {
        return text.to_string();
    }

    let prefix = pick(SUPPORTIVE_PREFIXES, rng);
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!(
            "{prefix}{}{}",
            first.to_lowercase(),
            chars.as_str()
        ),
        None => prefix.to_string(),
    }
}

fn pick<'a, R: Rng>(pool: &'a [&'a str], rng: &mut R) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
