//! Scoped per-exercise log histories
//!
//! Each scope persists one JSON document mapping exercise id to its entries.
//! Loading never fails: a missing, unreadable or corrupt document is logged
//! and treated as empty so the app stays usable. Saving propagates every
//! failure, since a silently dropped log entry is lost training data.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::db::{KeyValueStore, StoreError};

/// Storage key of the guest scope; other scopes append `:{user}`
pub const LOGS_BASE_KEY: &str = "exercise_logs";

const GUEST: &str = "guest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub weight: String,
    pub reps: String,
    pub notes: String,
}

impl LogEntry {
    /// New entry stamped with the current time
    pub fn new(weight: &str, reps: &str, notes: &str) -> Self {
        Self {
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            weight: weight.trim().to_string(),
            reps: reps.trim().to_string(),
            notes: notes.to_string(),
        }
    }
}

/// Exercise id -> entries in insertion order
pub type LogCollection = BTreeMap<String, Vec<LogEntry>>;

/// Owner of a log document: a user id or the guest sentinel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(String);

impl Scope {
    pub fn guest() -> Self {
        Scope(GUEST.to_string())
    }

    /// Scope for the identity provider's current user; no user means guest
    pub fn from_user(user: Option<&str>) -> Self {
        match user.map(str::trim) {
            Some(id) if !id.is_empty() => Scope(id.to_string()),
            _ => Self::guest(),
        }
    }

    pub fn is_guest(&self) -> bool {
        self.0 == GUEST
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::guest()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn storage_key(base_key: &str, scope: &Scope) -> String {
    if scope.is_guest() {
        base_key.to_string()
    } else {
        format!("{}:{}", base_key, scope)
    }
}

pub struct LogStore<S> {
    store: S,
    base_key: String,
}

impl<S: KeyValueStore> LogStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_base_key(store, LOGS_BASE_KEY)
    }

    pub fn with_base_key(store: S, base_key: &str) -> Self {
        Self {
            store,
            base_key: base_key.to_string(),
        }
    }

    #[cfg(test)]
    fn backend(&self) -> &S {
        &self.store
    }

    pub async fn load(&self, scope: &Scope) -> LogCollection {
        let key = storage_key(&self.base_key, scope);

        let raw = match self.store.get(&key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return LogCollection::new(),
            Err(e) => {
                warn!("Failed to read logs at {}: {}", key, e);
                return LogCollection::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(collection) => collection,
            Err(e) => {
                warn!("Corrupted logs at {}, starting empty: {}", key, e);
                LogCollection::new()
            }
        }
    }

    pub async fn save(&self, collection: &LogCollection, scope: &Scope) -> Result<(), StoreError> {
        let key = storage_key(&self.base_key, scope);
        let raw = serde_json::to_string(collection)?;
        self.store.set(&key, raw).await?;
        debug!("Saved logs for {} exercises at {}", collection.len(), key);
        Ok(())
    }

    pub async fn history(&self, scope: &Scope, exercise_id: &str) -> Vec<LogEntry> {
        self.load(scope)
            .await
            .remove(exercise_id)
            .unwrap_or_default()
    }

    /// Append an entry to an exercise history and persist it
    pub async fn add_entry(
        &self,
        scope: &Scope,
        exercise_id: &str,
        entry: LogEntry,
    ) -> Result<(), StoreError> {
        let mut collection = self.load(scope).await;
        collection
            .entry(exercise_id.to_string())
            .or_default()
            .push(entry);
        self.save(&collection, scope).await
    }

    /// Remove the entry at `index`; returns it, or `None` when out of range
    pub async fn remove_entry(
        &self,
        scope: &Scope,
        exercise_id: &str,
        index: usize,
    ) -> Result<Option<LogEntry>, StoreError> {
        let mut collection = self.load(scope).await;

        let Some(entries) = collection.get_mut(exercise_id) else {
            return Ok(None);
        };
        if index >= entries.len() {
            return Ok(None);
        }

        let removed = entries.remove(index);
        if entries.is_empty() {
            collection.remove(exercise_id);
        }

        self.save(&collection, scope).await?;
        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::db::{Database, MemoryStore};

    /// Backend that rejects every read and write
    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
        }

        async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery))
        }
    }

    fn entry(date: &str, weight: &str) -> LogEntry {
        LogEntry {
            date: date.to_string(),
            weight: weight.to_string(),
            reps: "8".to_string(),
            notes: String::new(),
        }
    }

    fn sample_collection() -> LogCollection {
        let mut collection = LogCollection::new();
        collection.insert(
            "hack_squat".to_string(),
            vec![
                entry("2024-03-01T10:00:00.000Z", "60"),
                entry("2024-03-08T10:00:00.000Z", "70"),
            ],
        );
        collection.insert("plank".to_string(), vec![entry("2024-03-02T09:30:00.000Z", "")]);
        collection
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key("exercise_logs", &Scope::guest()), "exercise_logs");
        assert_eq!(
            storage_key("exercise_logs", &Scope::from_user(Some("uid-42"))),
            "exercise_logs:uid-42"
        );
    }

    #[test]
    fn test_scope_from_user() {
        assert!(Scope::from_user(None).is_guest());
        assert!(Scope::from_user(Some("  ")).is_guest());
        assert_eq!(Scope::from_user(Some("abc")).as_str(), "abc");
        assert_eq!(Scope::default(), Scope::guest());
    }

    #[tokio::test]
    async fn test_load_missing_is_empty() {
        let logs = LogStore::new(MemoryStore::new());
        assert!(logs.load(&Scope::guest()).await.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let logs = LogStore::new(MemoryStore::new());
        let scope = Scope::from_user(Some("user-1"));
        let collection = sample_collection();

        logs.save(&collection, &scope).await.unwrap();
        assert_eq!(logs.load(&scope).await, collection);
    }

    #[tokio::test]
    async fn test_round_trip_sqlite() {
        let logs = LogStore::new(Database::open(":memory:").unwrap());
        let collection = sample_collection();

        logs.save(&collection, &Scope::guest()).await.unwrap();
        assert_eq!(logs.load(&Scope::guest()).await, collection);
        assert_eq!(logs.backend().keys().await.unwrap(), vec!["exercise_logs".to_string()]);
    }

    #[tokio::test]
    async fn test_scopes_are_isolated() {
        let logs = LogStore::new(MemoryStore::new());
        let alice = Scope::from_user(Some("alice"));
        let bob = Scope::from_user(Some("bob"));

        logs.save(&sample_collection(), &alice).await.unwrap();
        assert!(logs.load(&bob).await.is_empty());
        assert!(logs.load(&Scope::guest()).await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupted_document_recovers_empty() {
        let store = MemoryStore::new();
        store.insert_raw("exercise_logs", "{not json").await;
        let logs = LogStore::new(store);
        assert!(logs.load(&Scope::guest()).await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_shape_recovers_empty() {
        let store = MemoryStore::new();
        store.insert_raw("exercise_logs:u1", r#"{"hack_squat": "60kg"}"#).await;
        let logs = LogStore::new(store);
        assert!(logs.load(&Scope::from_user(Some("u1"))).await.is_empty());
    }

    #[tokio::test]
    async fn test_reads_existing_document_format() {
        let store = MemoryStore::new();
        store
            .insert_raw(
                "exercise_logs",
                r#"{"deadlift":[{"date":"2024-01-05T18:00:00.000Z","weight":"120","reps":"5","notes":"PR"}]}"#,
            )
            .await;
        let logs = LogStore::new(store);

        let history = logs.history(&Scope::guest(), "deadlift").await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].weight, "120");
        assert_eq!(history[0].notes, "PR");
    }

    #[tokio::test]
    async fn test_save_failure_propagates() {
        let logs = LogStore::new(MemoryStore::with_quota(16));
        let err = logs.save(&sample_collection(), &Scope::guest()).await;
        assert!(matches!(err, Err(StoreError::QuotaExceeded { .. })));
    }

    #[tokio::test]
    async fn test_add_entry_appends_in_order() {
        let logs = LogStore::new(MemoryStore::new());
        let scope = Scope::guest();

        logs.add_entry(&scope, "hack_squat", entry("2024-03-01T10:00:00.000Z", "60")).await.unwrap();
        logs.add_entry(&scope, "hack_squat", entry("2024-03-08T10:00:00.000Z", "70")).await.unwrap();

        let weights: Vec<_> = logs
            .history(&scope, "hack_squat")
            .await
            .into_iter()
            .map(|e| e.weight)
            .collect();
        assert_eq!(weights, vec!["60", "70"]);
    }

    #[tokio::test]
    async fn test_add_entry_failure_propagates() {
        let logs = LogStore::new(MemoryStore::with_quota(10));
        let result = logs
            .add_entry(&Scope::guest(), "hack_squat", entry("2024-03-01T10:00:00.000Z", "60"))
            .await;
        assert!(result.is_err());
        assert!(logs.load(&Scope::guest()).await.is_empty());
    }

    #[tokio::test]
    async fn test_backend_read_failure_recovers_empty() {
        let logs = LogStore::new(BrokenStore);
        assert!(logs.load(&Scope::guest()).await.is_empty());
        assert!(logs.history(&Scope::from_user(Some("u1")), "hack_squat").await.is_empty());
    }

    #[tokio::test]
    async fn test_backend_write_failure_propagates() {
        let logs = LogStore::new(BrokenStore);
        let result = logs.save(&sample_collection(), &Scope::guest()).await;
        assert!(matches!(result, Err(StoreError::Sqlite(_))));
    }

    #[tokio::test]
    async fn test_remove_entry_failure_propagates() {
        let store = MemoryStore::with_quota(16);
        let raw = serde_json::to_string(&sample_collection()).unwrap();
        store.insert_raw(LOGS_BASE_KEY, &raw).await;
        let logs = LogStore::new(store);

        // still larger than the quota after dropping one entry
        let result = logs.remove_entry(&Scope::guest(), "hack_squat", 0).await;
        assert!(matches!(result, Err(StoreError::QuotaExceeded { .. })));
        assert_eq!(logs.history(&Scope::guest(), "hack_squat").await.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_entry() {
        let logs = LogStore::new(MemoryStore::new());
        let scope = Scope::guest();
        logs.save(&sample_collection(), &scope).await.unwrap();

        let removed = logs.remove_entry(&scope, "hack_squat", 0).await.unwrap();
        assert_eq!(removed.map(|e| e.weight).as_deref(), Some("60"));
        assert_eq!(logs.history(&scope, "hack_squat").await.len(), 1);

        // out of range and unknown ids are no-ops
        assert_eq!(logs.remove_entry(&scope, "hack_squat", 5).await.unwrap(), None);
        assert_eq!(logs.remove_entry(&scope, "nope", 0).await.unwrap(), None);

        // emptied history drops its key
        logs.remove_entry(&scope, "plank", 0).await.unwrap();
        assert!(!logs.load(&scope).await.contains_key("plank"));
    }

    #[test]
    fn test_new_entry_is_iso_timestamp() {
        let e = LogEntry::new(" 62.5 ", "8", "");
        assert_eq!(e.weight, "62.5");
        assert!(e.date.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&e.date).is_ok());
    }
}
