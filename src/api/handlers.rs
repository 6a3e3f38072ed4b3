//! HTTP request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    response::Html,
    Json,
};

use crate::api::types::*;
use crate::domain::{CreateItemRequest, Item};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Static document served at /aboutllm.
const ABOUT_LLM_HTML: &str = include_str!("../../static/aboutllm.html");

/// Welcome message.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service welcome", body = InfoResponse)
    ),
    tag = "info"
)]
pub async fn welcome() -> Json<InfoResponse> {
    Json(InfoResponse::running("Welcome to the Backend API"))
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "backend".to_string(),
    })
}

/// GET /aboutme
#[utoipa::path(
    get,
    path = "/aboutme",
    responses(
        (status = 200, description = "Service description", body = InfoResponse)
    ),
    tag = "info"
)]
pub async fn about() -> Json<InfoResponse> {
    Json(InfoResponse::running("About the Backend API"))
}

/// List the seed items plus the accumulator snapshot.
///
/// GET /api/data
#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "Seed items followed by the accumulated record", body = ListItemsResponse)
    ),
    tag = "items"
)]
pub async fn list_items(State(state): State<AppState>) -> Json<ListItemsResponse> {
    Json(ListItemsResponse {
        data: state.store.list().await,
    })
}

/// Create an item and merge it into the accumulator.
///
/// POST /api/data
#[utoipa::path(
    post,
    path = "/api/data",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = CreateItemResponse),
        (status = 400, description = "Missing or unparsable body", body = crate::error::ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateItemResponse>)> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected item body");
        ApiError::MissingBody
    })?;

    let item = Item::from_request(request);
    let fields = state.store.merge(item.clone()).await;

    tracing::info!(
        item_id = item.id,
        item_name = %item.name,
        accumulator_fields = fields,
        "Item created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateItemResponse {
            message: "Data created successfully".to_string(),
            item,
        }),
    ))
}

/// Static HTML document describing the API.
///
/// GET /aboutllm
#[utoipa::path(
    get,
    path = "/aboutllm",
    responses(
        (status = 200, description = "Static HTML document", content_type = "text/html", body = String)
    ),
    tag = "info"
)]
pub async fn about_llm() -> Html<&'static str> {
    Html(ABOUT_LLM_HTML)
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
