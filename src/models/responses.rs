//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies. The client data
//! context parses the same shapes, so everything here derives Deserialize too.

use serde::{Deserialize, Serialize};

use crate::catalog::{ItemStats, DEFAULT_LIMIT};
use crate::models::Item;

/// Pagination envelope attached to every list response.
///
/// Computed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of items after filtering, across all pages
    pub total: usize,
    /// 1-based page number that was requested
    pub page: usize,
    /// Requested page size
    pub limit: usize,
    /// ceil(total / limit)
    pub total_pages: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: DEFAULT_LIMIT,
            total_pages: 0,
        }
    }
}

/// Response body for the list operation (GET /api/items)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// The requested page of items
    pub items: Vec<Item>,
    /// Pagination envelope for the filtered collection
    pub pagination: Pagination,
}

/// Response body for the stats endpoint (GET /api/stats)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of items in the collection
    pub total: usize,
    /// Mean price across the collection, 0 when empty
    pub average_price: f64,
}

impl From<ItemStats> for StatsResponse {
    fn from(stats: ItemStats) -> Self {
        Self {
            total: stats.total,
            average_price: stats.average_price,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
