pub mod classifier;
pub mod content;

pub use classifier::{classify, EmotionalAssessment, StressBucket, ToneStyle};
pub use content::{adapt_content, soften_prompt, ActionPriority, HopeContent, NextAction};
