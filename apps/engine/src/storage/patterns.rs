//! Success-pattern repository over the key-value boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::EngineError;
use crate::models::pattern::SuccessPattern;
use crate::storage::kv::KeyValueStore;

pub const PATTERN_KEY_PREFIX: &str = "success-pattern:";

/// Read-only access to the success-pattern corpus.
#[async_trait]
pub trait PatternRepository: Send + Sync {
    /// Loads every readable pattern. Malformed records are skipped with
    /// a warning; they never abort the batch.
    async fn load_all(&self) -> Result<Vec<SuccessPattern>, EngineError>;
}

/// Key-value-backed pattern repository: prefix scan + per-key fetch.
pub struct KvPatternRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvPatternRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PatternRepository for KvPatternRepository {
    async fn load_all(&self) -> Result<Vec<SuccessPattern>, EngineError> {
        let keys = self.store.list_keys_by_prefix(PATTERN_KEY_PREFIX).await?;
        let mut patterns = Vec::with_capacity(keys.len());

        for key in keys {
            let Some(value) = self.store.get(&key).await? else {
                // Key listed but gone by fetch time; harmless race.
                continue;
            };
            match serde_json::from_value::<SuccessPattern>(value) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => warn!("skipping malformed success pattern at {key}: {e}"),
            }
        }

        debug!("loaded {} success patterns", patterns.len());
        Ok(patterns)
    }
}
