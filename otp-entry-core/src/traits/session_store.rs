//! Session-scoped store abstract Trait

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Session Store Trait
///
/// Short-lived key/value storage shared with later steps of the surrounding flow.
/// Provides a default memory implementation of `InMemorySessionStore`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Write `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> CoreResult<Option<String>>;
}

/// In-memory session store
///
/// Lives as long as the process; nothing is persisted.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("OTP").await.unwrap(), None);

        store.put("OTP", "123456").await.unwrap();
        store.put("OTP", "654321").await.unwrap();
        assert_eq!(store.get("OTP").await.unwrap().as_deref(), Some("654321"));
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let store = InMemorySessionStore::new();
        let other = store.clone();
        store.put("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
