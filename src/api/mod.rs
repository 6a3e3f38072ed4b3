//! HTTP API layer for the Backend API.
//!
//! Provides the descriptive, health and item endpoints.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
