//! Similarity scoring — measures how closely a user's profile resembles
//! one recorded success pattern.
//!
//! Pure arithmetic, fully deterministic: a weighted sum of four
//! independent dimensions (role, experience, skill overlap, target
//! role), clamped to [0, 1]. No learned models.

use crate::config::SimilarityWeights;
use crate::models::pattern::SuccessPattern;
use crate::models::user::UserProfile;

// ────────────────────────────────────────────────────────────────────────────
// Dimension sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Role similarity: exact (case-insensitive) equality earns the full
/// weight, substring containment either direction earns partial credit,
/// and anything else still earns a small base credit so no pattern
/// zeroes out on role alone.
fn role_score(current_role: &str, previous_role: &str, w: &SimilarityWeights) -> f64 {
    let user = current_role.to_lowercase();
    let pattern = previous_role.to_lowercase();

    if user == pattern {
        w.role_exact
    } else if user.contains(&pattern) || pattern.contains(&user) {
        w.role_partial
    } else {
        w.role_base
    }
}

/// Experience similarity from the absolute year difference.
fn experience_score(user_years: f64, pattern_years: f64, w: &SimilarityWeights) -> f64 {
    let diff = (user_years - pattern_years).abs();
    if diff == 0.0 {
        w.experience_exact
    } else if diff <= 1.0 {
        w.experience_close
    } else if diff <= 2.0 {
        w.experience_near
    } else {
        w.experience_base
    }
}

/// Skill overlap: |intersection| / max(|user|, |pattern|), scaled to the
/// skills weight. Either side being empty earns a small sparse-profile
/// credit instead of zero.
fn skills_score(user_skills: &[String], pattern_skills: &[String], w: &SimilarityWeights) -> f64 {
    if user_skills.is_empty() || pattern_skills.is_empty() {
        return w.skills_sparse_credit;
    }

    let shared = shared_skills(user_skills, pattern_skills).len();
    let denom = user_skills.len().max(pattern_skills.len()) as f64;
    (shared as f64 / denom) * w.skills_max
}

/// Target-role alignment against the role the pattern's employer filled.
fn target_score(target_role: &str, employer_role: &str, w: &SimilarityWeights) -> f64 {
    let target = target_role.to_lowercase();
    let filled = employer_role.to_lowercase();

    if target == filled {
        w.target_exact
    } else if target.contains(&filled) || filled.contains(&target) {
        w.target_partial
    } else {
        0.0
    }
}

fn shared_skills(user_skills: &[String], pattern_skills: &[String]) -> Vec<String> {
    user_skills
        .iter()
        .filter(|s| {
            pattern_skills
                .iter()
                .any(|p| p.eq_ignore_ascii_case(s.as_str()))
        })
        .cloned()
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Public scoring surface
// ────────────────────────────────────────────────────────────────────────────

/// Computes the [0, 1] similarity between a user and one pattern.
pub fn compute_similarity(
    user: &UserProfile,
    pattern: &SuccessPattern,
    weights: &SimilarityWeights,
) -> f64 {
    let score = role_score(&user.current_role, &pattern.user_profile.previous_role, weights)
        + experience_score(
            user.experience_years,
            pattern.user_profile.experience_years,
            weights,
        )
        + skills_score(&user.skills, &pattern.user_profile.skills, weights)
        + target_score(&user.target_role, &pattern.employer_match.role, weights);

    score.clamp(0.0, 1.0)
}

/// Human-readable reasons a pattern matched. Only dimensions that
/// contributed non-trivially appear; used for transparency, never for
/// ranking.
pub fn explain_similarity(
    user: &UserProfile,
    pattern: &SuccessPattern,
    weights: &SimilarityWeights,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if role_score(&user.current_role, &pattern.user_profile.previous_role, weights)
        > weights.role_base
    {
        reasons.push(format!(
            "Started from a similar role ({})",
            pattern.user_profile.previous_role
        ));
    }

    let year_diff = (user.experience_years - pattern.user_profile.experience_years).abs();
    if year_diff <= 2.0 {
        reasons.push("Comparable experience level".to_string());
    }

    let shared = shared_skills(&user.skills, &pattern.user_profile.skills);
    if !shared.is_empty() {
        reasons.push(format!("Shared skills: {}", shared.join(", ")));
    }

    reasons
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::models::pattern::{
        ConcreteOutcomes, EmployerMatch, PatternProfile, SuccessPath,
    };

    fn make_user(role: &str, years: f64, target: &str, skills: &[&str]) -> UserProfile {
        UserProfile {
            current_role: role.to_string(),
            experience_years: years,
            target_role: target.to_string(),
            target_industry: "tech".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: None,
        }
    }

    fn make_pattern(role: &str, years: f64, employer_role: &str, skills: &[&str]) -> SuccessPattern {
        SuccessPattern {
            id: Uuid::new_v4(),
            user_profile: PatternProfile {
                previous_role: role.to_string(),
                experience_years: years,
                skills: skills.iter().map(|s| s.to_string()).collect(),
            },
            success_path: SuccessPath {
                key_actions: vec![],
                timeline: "3 months".to_string(),
                obstacles_overcome: vec![],
                critical_moments: vec![],
            },
            employer_match: EmployerMatch {
                company_type: "startup".to_string(),
                role: employer_role.to_string(),
                culture_fit_factors: vec![],
            },
            concrete_outcomes: ConcreteOutcomes {
                offer_received: true,
                salary_achieved: 100_000.0,
                timeline_to_offer: 60,
                company_name: "Acme".to_string(),
            },
        }
    }

    #[test]
    fn test_near_perfect_match_scores_above_0_8() {
        // Identical role, experience, and skills; exact target-role hit.
        let user = make_user(
            "Junior Developer",
            2.0,
            "Senior Developer",
            &["JavaScript", "React"],
        );
        let pattern = make_pattern(
            "Junior Developer",
            2.0,
            "Senior Developer",
            &["JavaScript", "React"],
        );
        let score = compute_similarity(&user, &pattern, &SimilarityWeights::default());
        assert!(score > 0.8, "near-perfect match scored {score}");
    }

    #[test]
    fn test_score_always_within_unit_interval() {
        let weights = SimilarityWeights::default();
        let cases = [
            (make_user("Dev", 0.0, "Dev", &[]), make_pattern("Dev", 0.0, "Dev", &[])),
            (
                make_user("Engineer", 30.0, "CTO", &["Go"]),
                make_pattern("Baker", 0.0, "Chef", &["Pastry"]),
            ),
        ];
        for (user, pattern) in &cases {
            let score = compute_similarity(user, pattern, &weights);
            assert!((0.0..=1.0).contains(&score), "score {score} out of bounds");
        }
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        let w = SimilarityWeights::default();
        assert_eq!(role_score("Data Analyst", "data analyst", &w), w.role_exact);
    }

    #[test]
    fn test_role_substring_earns_partial_credit() {
        let w = SimilarityWeights::default();
        assert_eq!(role_score("Senior Data Analyst", "Data Analyst", &w), w.role_partial);
    }

    #[test]
    fn test_unrelated_role_still_earns_base_credit() {
        let w = SimilarityWeights::default();
        assert_eq!(role_score("Nurse", "Accountant", &w), w.role_base);
    }

    #[test]
    fn test_experience_ladder() {
        let w = SimilarityWeights::default();
        assert_eq!(experience_score(3.0, 3.0, &w), w.experience_exact);
        assert_eq!(experience_score(3.0, 4.0, &w), w.experience_close);
        assert_eq!(experience_score(3.0, 5.0, &w), w.experience_near);
        assert_eq!(experience_score(3.0, 9.0, &w), w.experience_base);
    }

    #[test]
    fn test_empty_skill_set_earns_sparse_credit_not_zero() {
        let w = SimilarityWeights::default();
        let score = skills_score(&[], &["Rust".to_string()], &w);
        assert_eq!(score, w.skills_sparse_credit);
    }

    #[test]
    fn test_full_skill_overlap_earns_max_weight() {
        let w = SimilarityWeights::default();
        let skills = vec!["Rust".to_string(), "SQL".to_string()];
        let score = skills_score(&skills, &skills, &w);
        assert!((score - w.skills_max).abs() < f64::EPSILON);
    }

    #[test]
    fn test_skill_overlap_uses_larger_set_as_denominator() {
        let w = SimilarityWeights::default();
        let user = vec!["Rust".to_string()];
        let pattern = vec![
            "Rust".to_string(),
            "SQL".to_string(),
            "Go".to_string(),
            "C".to_string(),
        ];
        // 1 shared / max(1, 4) = 0.25 of the skills weight
        let score = skills_score(&user, &pattern, &w);
        assert!((score - 0.25 * w.skills_max).abs() < 1e-9);
    }

    #[test]
    fn test_target_role_no_match_is_zero() {
        let w = SimilarityWeights::default();
        assert_eq!(target_score("Product Manager", "Staff Engineer", &w), 0.0);
    }

    #[test]
    fn test_explain_lists_shared_skills() {
        let user = make_user("Dev", 2.0, "Senior Dev", &["JavaScript", "React"]);
        let pattern = make_pattern("Dev", 2.0, "Senior Dev", &["React", "SQL"]);
        let reasons = explain_similarity(&user, &pattern, &SimilarityWeights::default());
        assert!(reasons.iter().any(|r| r.contains("React")));
    }

    #[test]
    fn test_explain_omits_trivial_contributions() {
        let user = make_user("Nurse", 1.0, "Doctor", &["Triage"]);
        let pattern = make_pattern("Accountant", 20.0, "CFO", &["Excel"]);
        let reasons = explain_similarity(&user, &pattern, &SimilarityWeights::default());
        assert!(
            reasons.is_empty(),
            "unrelated profiles should produce no reasons, got {reasons:?}"
        );
    }
}
