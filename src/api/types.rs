//! API request and response types.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::Item;

/// Version reported by the descriptive endpoints.
pub const API_VERSION: &str = "1.0.0";

// ==================== Descriptive ====================

/// Payload of the welcome and about endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

impl InfoResponse {
    pub fn running(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status: "running".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service name.
    pub service: String,
}

// ==================== Items ====================

/// Response for listing items.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListItemsResponse {
    /// Seed items followed by the accumulator snapshot.
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<Value>,
}

/// Response after creating an item.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateItemResponse {
    pub message: String,
    pub item: Item,
}
