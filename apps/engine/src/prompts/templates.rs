//! Built-in prompt template catalog.
//!
//! Static reference data: one vetted template per category, with the
//! variables it declares and its observed base effectiveness.

use crate::errors::EngineError;
use crate::models::prompt::{PromptCategory, PromptTemplate};

pub const RESUME_TAILORING: PromptTemplate = PromptTemplate {
    id: "resume_tailoring_v1",
    category: PromptCategory::ResumeTailoring,
    template: "Rewrite my resume summary for a {target_role} position in {target_industry}. \
        I'm currently a {current_role} with {experience_years} years of experience. \
        My key skills are {skills}. Keep the tone {tone} and lead with measurable impact.",
    variables: &[
        "target_role",
        "target_industry",
        "current_role",
        "experience_years",
        "skills",
        "tone",
    ],
    effectiveness_score: 0.75,
};

pub const OUTREACH_MESSAGE: PromptTemplate = PromptTemplate {
    id: "outreach_message_v1",
    category: PromptCategory::OutreachMessage,
    template: "Draft a short, {tone} outreach message to a hiring manager about a {target_role} \
        opening. Mention my background as a {current_role} and my interest in {target_industry}. \
        Keep it under 120 words and end with a low-friction ask.",
    variables: &["tone", "target_role", "current_role", "target_industry"],
    effectiveness_score: 0.70,
};

pub const INTERVIEW_PREP: PromptTemplate = PromptTemplate {
    id: "interview_prep_v1",
    category: PromptCategory::InterviewPrep,
    template: "Help me prepare for a {target_role} interview. I have {experience_years} years of \
        experience as a {current_role} and my strongest skills are {skills}. Give me five likely \
        questions with strong example answers in a {tone} voice.",
    variables: &[
        "target_role",
        "experience_years",
        "current_role",
        "skills",
        "tone",
    ],
    effectiveness_score: 0.80,
};

pub const SKILL_GAP_PLAN: PromptTemplate = PromptTemplate {
    id: "skill_gap_plan_v1",
    category: PromptCategory::SkillGapPlan,
    template: "Build me a learning plan to move from {current_role} to {target_role} within \
        {timeline}. My current skills: {skills}. Prioritize the gaps that matter most in \
        {target_industry} and keep weekly effort realistic.",
    variables: &[
        "current_role",
        "target_role",
        "timeline",
        "skills",
        "target_industry",
    ],
    effectiveness_score: 0.65,
};

pub const CATALOG: &[PromptTemplate] = &[
    RESUME_TAILORING,
    OUTREACH_MESSAGE,
    INTERVIEW_PREP,
    SKILL_GAP_PLAN,
];

/// Looks up a template by id.
pub fn find_template(id: &str) -> Result<&'static PromptTemplate, EngineError> {
    CATALOG
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| EngineError::TemplateNotFound(id.to_string()))
}
