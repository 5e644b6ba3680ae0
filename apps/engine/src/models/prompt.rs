use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value in an interpolation context map.
///
/// Context maps used to be loosely-typed dictionaries; this tagged union
/// pins down exactly what a template variable may hold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Text(s) => write!(f, "{s}"),
            ContextValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            ContextValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::Text(s.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::Text(s)
    }
}

impl From<f64> for ContextValue {
    fn from(n: f64) -> Self {
        ContextValue::Number(n)
    }
}

/// Ordered map so serialized context data is stable across runs.
pub type ContextMap = BTreeMap<String, ContextValue>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PromptCategory {
    ResumeTailoring,
    OutreachMessage,
    InterviewPrep,
    SkillGapPlan,
}

/// Static reference template with `{variable}` placeholders.
#[derive(Debug, Clone, Serialize)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub category: PromptCategory,
    pub template: &'static str,
    pub variables: &'static [&'static str],
    /// Base effectiveness observed for this template, 0.0 – 1.0.
    pub effectiveness_score: f64,
}

/// Finished prompt, scored for how much of the user's context it absorbed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedPrompt {
    pub generated_prompt: String,
    pub personalization_score: f64,
    pub expected_effectiveness: f64,
    pub context_data: ContextMap,
}
