pub mod matcher;
pub mod similarity;

pub use matcher::{MatchResult, PatternMatcher};
pub use similarity::{compute_similarity, explain_similarity};
