//! Request and Response models for the catalog API
//!
//! This module defines the domain record plus the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod item;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use item::Item;
pub use requests::ListQuery;
pub use responses::{ErrorResponse, HealthResponse, ListResponse, Pagination, StatsResponse};
