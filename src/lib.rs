//! Item Catalog - a JSON-file-backed CRUD server
//!
//! Exposes paginated, searchable, creatable item resources over HTTP, with a
//! modification-time-keyed stats cache and a client layer for the list and
//! detail views.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
