//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::welcome,
        handlers::health_check,
        handlers::about,
        handlers::list_items,
        handlers::create_item,
        handlers::about_llm,
    ),
    components(schemas(
        crate::api::types::InfoResponse,
        crate::api::types::HealthResponse,
        crate::api::types::ListItemsResponse,
        crate::api::types::CreateItemResponse,
        crate::domain::Item,
        crate::domain::CreateItemRequest,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "info", description = "Descriptive endpoints"),
        (name = "items", description = "Sample data and item creation"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Backend API",
        version = "1.0.0",
        description = "Demo backend serving sample data from an in-memory store",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health_check))
        .route("/aboutme", get(handlers::about))
        .route("/aboutllm", get(handlers::about_llm))
        // Items
        .route(
            "/api/data",
            get(handlers::list_items).post(handlers::create_item),
        )
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::ItemStore;

    fn app() -> (Router, ItemStore) {
        let store = ItemStore::new();
        let router = build_router(AppState {
            store: store.clone(),
        });
        (router, store)
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(router, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(router: &Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/data")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, body) = send(router, request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_welcome() {
        let (router, _) = app();
        let (status, body) = get_json(&router, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Welcome to the Backend API",
                "status": "running",
                "version": "1.0.0"
            })
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let (router, _) = app();
        let (status, body) = get_json(&router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy", "service": "backend"}));
    }

    #[tokio::test]
    async fn test_about() {
        let (router, _) = app();
        let (status, body) = get_json(&router, "/aboutme").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "About the Backend API");
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_list_items_before_any_creation() {
        let (router, _) = app();
        let (status, body) = get_json(&router, "/api/data").await;
        assert_eq!(status, StatusCode::OK);

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data[0], json!({"id": 1, "name": "Item 1", "value": 100}));
        assert_eq!(data[1], json!({"id": 2, "name": "Item 2", "value": 200}));
        assert_eq!(data[2], json!({"id": 3, "name": "Item 3", "value": 300}));
        assert_eq!(data[3], json!({}));
    }

    #[tokio::test]
    async fn test_create_item() {
        let (router, _) = app();
        let (status, body) = post_json(&router, json!({"name": "Test Item", "value": 150})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "message": "Data created successfully",
                "item": {"id": 1, "name": "Test Item", "value": 150}
            })
        );
    }

    #[tokio::test]
    async fn test_create_item_with_empty_object_uses_defaults() {
        let (router, _) = app();
        let (status, body) = post_json(&router, json!({})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["item"], json!({"id": 1, "name": "New Item", "value": 0}));
    }

    #[tokio::test]
    async fn test_create_item_id_counts_items() {
        let (router, _) = app();
        let (status, body) = post_json(&router, json!({"items": [1, 2]})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["item"]["id"], 3);
    }

    #[tokio::test]
    async fn test_create_item_without_body() {
        let (router, store) = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/data")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "No data provided"}));
        assert_eq!(store.snapshot().await, json!({}));
    }

    #[tokio::test]
    async fn test_create_item_with_unparsable_body() {
        let (router, _) = app();
        for raw in ["", "null", "not json", "[1, 2]"] {
            let request = Request::builder()
                .method(Method::POST)
                .uri("/api/data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(raw))
                .unwrap();
            let (status, body) = send(&router, request).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");

            let body: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(body["error"], "No data provided");
        }
    }

    #[tokio::test]
    async fn test_repeated_creation_overwrites_accumulator() {
        let (router, store) = app();
        post_json(&router, json!({"name": "Test Item", "value": 150})).await;
        post_json(&router, json!({"name": "Another Item", "value": 250})).await;

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.as_object().unwrap().len(), 3);

        let (_, body) = get_json(&router, "/api/data").await;
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data[3], json!({"id": 1, "name": "Another Item", "value": 250}));
    }

    #[tokio::test]
    async fn test_about_llm_is_html() {
        let (router, _) = app();
        let request = Request::builder().uri("/aboutllm").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("<html"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_not_found() {
        let (router, _) = app();
        let (status, body) = get_json(&router, "/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let (router, _) = app();
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_openapi_document_lists_routes() {
        let (router, _) = app();
        let (status, body) = get_json(&router, "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/api/data").is_some());
        assert!(body["paths"].get("/aboutllm").is_some());
    }
}
