//! Storage layer for the Backend API.
//!
//! Process-lifetime, in-memory only.

mod store;

pub use store::ItemStore;
