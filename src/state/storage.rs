//! Draft storage implementation
//!
//! Persistence of event drafts behind a narrow key-value interface. The
//! production backend is Redis with per-key TTLs; an in-memory backend
//! exists so draft behavior can be tested without a real store. A stored
//! draft that fails to deserialize is treated as absent rather than as an
//! error, matching the resume-silently contract.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::RedisConfig;
use crate::models::draft::EventDraft;
use crate::utils::errors::Result;

/// Narrow async key-value interface over the durable store.
///
/// Writes are last-write-wins; a `set` fully overwrites any earlier value
/// under the same key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Redis-backed key-value store
#[derive(Clone)]
pub struct RedisKeyValueStore {
    connection_manager: redis::aio::ConnectionManager,
}

impl RedisKeyValueStore {
    pub async fn new(config: &RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self { connection_manager })
    }

    /// Test Redis connection
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let value: Option<String> = conn.get(key).await?;
        debug!(key = %key, has_value = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await?;
        debug!(key = %key, ttl_seconds = ttl_seconds, "Redis SET");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let deleted: u32 = conn.del(key).await?;
        debug!(key = %key, deleted = deleted > 0, "Redis DEL");
        Ok(())
    }
}

impl std::fmt::Debug for RedisKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKeyValueStore").finish_non_exhaustive()
    }
}

/// In-memory key-value store for tests and single-process use.
///
/// TTLs are accepted but not enforced; entries live until removed.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl_seconds: u64) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Draft persistence over a [`KeyValueStore`].
///
/// One named slot per user holds the JSON-serialized draft.
#[derive(Clone)]
pub struct DraftStorage {
    store: Arc<dyn KeyValueStore>,
    prefix: String,
    ttl_seconds: u64,
}

impl DraftStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, prefix: &str, ttl_seconds: u64) -> Self {
        Self {
            store,
            prefix: prefix.to_string(),
            ttl_seconds,
        }
    }

    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &RedisConfig) -> Self {
        Self::new(store, &config.prefix, config.ttl_seconds)
    }

    /// Save a draft, fully overwriting any earlier one
    pub async fn save_draft(&self, user_id: i64, draft: &EventDraft) -> Result<()> {
        let key = self.draft_key(user_id);
        let serialized = serde_json::to_string(draft)?;
        self.store.set(&key, &serialized, self.ttl_seconds).await?;
        debug!(user_id = user_id, key = %key, "Draft saved");
        Ok(())
    }

    /// Load a stored draft.
    ///
    /// Absent and malformed slots both yield `None`; a malformed payload is
    /// logged and removed so the next save starts clean.
    pub async fn load_draft(&self, user_id: i64) -> Result<Option<EventDraft>> {
        let key = self.draft_key(user_id);
        let Some(serialized) = self.store.get(&key).await? else {
            debug!(user_id = user_id, "No stored draft");
            return Ok(None);
        };

        match serde_json::from_str::<EventDraft>(&serialized) {
            Ok(draft) => {
                debug!(user_id = user_id, "Draft loaded");
                Ok(Some(draft))
            }
            Err(e) => {
                warn!(user_id = user_id, error = %e, "Stored draft is malformed, discarding");
                self.store.remove(&key).await?;
                Ok(None)
            }
        }
    }

    /// Remove the stored draft slot
    pub async fn clear_draft(&self, user_id: i64) -> Result<()> {
        let key = self.draft_key(user_id);
        self.store.remove(&key).await?;
        debug!(user_id = user_id, "Draft cleared");
        Ok(())
    }

    fn draft_key(&self, user_id: i64) -> String {
        format!("{}draft:{}", self.prefix, user_id)
    }
}

impl std::fmt::Debug for DraftStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftStorage")
            .field("prefix", &self.prefix)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
