//! In-memory remote store
//!
//! A [`RemoteStore`] backed by in-process collections of JSON records. Serves
//! the demo binary and tests; a deployment against a hosted backend would
//! provide its own implementation of the trait.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::remote::{Order, Predicate, RemoteStore};

// == Memory Store ==
/// Collections of JSON records held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of a collection.
    pub async fn put_collection(&self, collection: impl Into<String>, records: Vec<Value>) {
        self.collections
            .write()
            .await
            .insert(collection.into(), records);
    }

    /// Inserts a single record into a collection, creating it if needed.
    pub async fn insert(&self, collection: &str, record: Value) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    /// Replaces the record with the given id, if present.
    ///
    /// The store is the source of truth; callers mutate here and then ask the
    /// service to invalidate the listing's cache entries.
    pub async fn replace(&self, collection: &str, id: &str, record: Value) {
        let mut collections = self.collections.write().await;
        if let Some(records) = collections.get_mut(collection) {
            for existing in records.iter_mut() {
                if record_id(existing) == Some(id) {
                    *existing = record;
                    return;
                }
            }
        }
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

fn sort_field(record: &Value, field: &str) -> String {
    match record.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        let records = collections.get(collection);
        Ok(records.and_then(|records| {
            records
                .iter()
                .find(|record| record_id(record) == Some(id))
                .cloned()
        }))
    }

    async fn find_many(
        &self,
        collection: &str,
        predicate: Predicate,
        order: Option<Order>,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        let mut matched: Vec<Value> = collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| predicate.matches(record))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = order {
            matched.sort_by_key(|record| sort_field(record, &order.field));
            if !order.ascending {
                matched.reverse();
            }
        }

        let skip = offset.unwrap_or(0);
        let take = limit.unwrap_or(usize::MAX);
        Ok(matched.into_iter().skip(skip).take(take).collect())
    }

    async fn find_related(
        &self,
        collection: &str,
        foreign_key: &str,
        id: &str,
    ) -> Result<Vec<Value>, StoreError> {
        self.find_many(
            collection,
            Predicate::eq(foreign_key, id),
            None,
            None,
            None,
        )
        .await
    }
}
