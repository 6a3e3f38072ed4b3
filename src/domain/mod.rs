//! Domain types for the Backend API.

mod item;

pub use item::*;
