//! Per-user progress persistence over the key-value boundary.
//!
//! The tracker's read-modify-write cycle has no locking: concurrent
//! updates for the same user can lose writes. Callers needing strict
//! ordering must serialize per-user writes outside the engine.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::EngineError;
use crate::models::progress::ProgressTracking;
use crate::storage::kv::KeyValueStore;

pub const PROGRESS_KEY_PREFIX: &str = "progress:";

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<Option<ProgressTracking>, EngineError>;

    async fn save(&self, user_id: &str, tracking: &ProgressTracking) -> Result<(), EngineError>;
}

pub struct KvProgressRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvProgressRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(user_id: &str) -> String {
        format!("{PROGRESS_KEY_PREFIX}{user_id}")
    }
}

#[async_trait]
impl ProgressRepository for KvProgressRepository {
    async fn load(&self, user_id: &str) -> Result<Option<ProgressTracking>, EngineError> {
        let Some(value) = self.store.get(&Self::key(user_id)).await? else {
            return Ok(None);
        };
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| EngineError::Storage(format!("corrupt progress record for {user_id}: {e}")))
    }

    async fn save(&self, user_id: &str, tracking: &ProgressTracking) -> Result<(), EngineError> {
        let value = serde_json::to_value(tracking)
            .map_err(|e| EngineError::Storage(format!("serialize progress for {user_id}: {e}")))?;
        self.store.put(&Self::key(user_id), value).await
    }
}
