//! Database module - key-value storage port and its backends
//!
//! Reads that find nothing return `Ok(None)`. Writes that the backend
//! rejects return `Err`; callers decide whether that is fatal.

use std::collections::HashMap;

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("serialization: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage quota exceeded: {needed} bytes needed, {limit} allowed")]
    QuotaExceeded { needed: usize, limit: usize },
}

/// Raw string storage addressed by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// SQLite-backed store
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open or create database
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    #[cfg(test)]
    pub(crate) async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for Database {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().await;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// In-memory store with an optional byte quota over all values
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            quota: Some(limit),
        }
    }

    /// Put a raw value, bypassing the quota (seeding legacy or broken data)
    pub async fn insert_raw(&self, key: &str, value: &str) {
        self.values.lock().await.insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut values = self.values.lock().await;

        if let Some(limit) = self.quota {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }

        values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_get_missing() {
        let db = Database::open(":memory:").unwrap();
        assert_eq!(db.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sqlite_set_overwrites() {
        let db = Database::open(":memory:").unwrap();
        db.set("k", "one".to_string()).await.unwrap();
        db.set("k", "two".to_string()).await.unwrap();
        assert_eq!(db.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(db.keys().await.unwrap(), vec!["k".to_string()]);
    }

    #[tokio::test]
    async fn test_sqlite_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liftlog.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::open(path).unwrap();
            db.set("exercise_logs", "{}".to_string()).await.unwrap();
        }

        let db = Database::open(path).unwrap();
        assert_eq!(db.get("exercise_logs").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_memory_quota() {
        let store = MemoryStore::with_quota(8);
        store.set("a", "12345".to_string()).await.unwrap();
        // replacing the same key only counts the new value
        store.set("a", "1234567".to_string()).await.unwrap();

        let err = store.set("b", "12".to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { needed: 9, limit: 8 }));
        assert_eq!(store.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_insert_raw() {
        let store = MemoryStore::new();
        store.insert_raw("k", "not json").await;
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("not json"));
    }
}
