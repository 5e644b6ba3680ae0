//! Key-value collaborator boundary.
//!
//! The engine never talks to a concrete store directly; it sees this
//! trait only. Retries and timeouts belong to the implementing adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::errors::EngineError;

/// Minimal JSON key-value interface the engine consumes.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, EngineError>;

    async fn put(&self, key: &str, value: Value) -> Result<(), EngineError>;

    /// Keys are returned in sorted order so batch operations over a
    /// prefix are deterministic.
    async fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, EngineError>;
}

/// In-memory store over a `BTreeMap`, used by tests and embeddable
/// callers that seed the corpus directly.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, EngineError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> Result<(), EngineError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn list_keys_by_prefix(&self, prefix: &str) -> Result<Vec<String>, EngineError> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }
}
