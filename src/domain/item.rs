//! Item domain types.
//!
//! Seed items are rebuilt on every read; created items are derived from a
//! typed creation request with explicit defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// Name given to a created item when the request omits one.
pub const DEFAULT_ITEM_NAME: &str = "New Item";

/// A sample record returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    /// Kept as a JSON number so integers round-trip as integers.
    #[schema(value_type = f64)]
    pub value: Number,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, value: impl Into<Number>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a new item from a creation request.
    ///
    /// `id` is one more than the number of entries in `items` (absent counts
    /// as empty); `name` and `value` fall back to "New Item" and 0.
    pub fn from_request(request: CreateItemRequest) -> Self {
        let id = request.items.as_ref().map_or(0, Vec::len) as u64 + 1;
        Self {
            id,
            name: request
                .name
                .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
            value: request.value.unwrap_or_else(|| Number::from(0)),
        }
    }

    /// Field map used when merging into the accumulator.
    pub fn into_fields(self) -> serde_json::Map<String, Value> {
        let mut fields = serde_json::Map::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("name".to_string(), Value::String(self.name));
        fields.insert("value".to_string(), Value::Number(self.value));
        fields
    }
}

/// The three fixed sample items, in declaration order.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::new(1, "Item 1", 100),
        Item::new(2, "Item 2", 200),
        Item::new(3, "Item 3", 300),
    ]
}

/// Body of a creation request. Every field is optional; unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Only the length is used, to derive the new item's id.
    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub items: Option<Vec<Value>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub value: Option<Number>,
}
