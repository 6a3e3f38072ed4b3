//! In-memory item store.

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::domain::{seed_items, Item};

/// Holds the accumulator record that creation requests merge into.
///
/// Every created item's fields are merged into one shared map, so a later
/// item overwrites same-named fields of an earlier one. The map lives for
/// the lifetime of the process and is never cleared.
#[derive(Clone, Default)]
pub struct ItemStore {
    accumulator: Arc<RwLock<Map<String, Value>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the accumulator as a JSON object.
    pub async fn snapshot(&self) -> Value {
        Value::Object(self.accumulator.read().await.clone())
    }

    /// Merge an item's fields into the accumulator.
    ///
    /// Returns the number of distinct keys afterwards.
    pub async fn merge(&self, item: Item) -> usize {
        let mut accumulator = self.accumulator.write().await;
        accumulator.extend(item.into_fields());
        accumulator.len()
    }

    /// Seed items in declaration order followed by the accumulator snapshot.
    pub async fn list(&self) -> Vec<Value> {
        let mut data: Vec<Value> = seed_items()
            .into_iter()
            .map(|item| Value::Object(item.into_fields()))
            .collect();
        data.push(self.snapshot().await);
        data
    }
}
