pub mod kv;
pub mod patterns;
pub mod progress;

pub use kv::{InMemoryKeyValueStore, KeyValueStore};
pub use patterns::{KvPatternRepository, PatternRepository, PATTERN_KEY_PREFIX};
pub use progress::{KvProgressRepository, ProgressRepository, PROGRESS_KEY_PREFIX};
