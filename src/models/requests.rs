//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request parameters.

use serde::Deserialize;

/// Query string for the list operation (GET /api/items)
///
/// `page` and `limit` are kept as raw strings here: validation belongs to the
/// query engine, which reports a distinct 400 message for each parameter
/// instead of letting the extractor reject the request wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// 1-based page number (default "1")
    pub page: Option<String>,
    /// Page size (default "10", valid range 1..=100)
    pub limit: Option<String>,
    /// Case-insensitive substring to match against name or category
    pub q: Option<String>,
}
