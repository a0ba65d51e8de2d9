//! Query Engine Module
//!
//! Parameter validation, case-insensitive substring search, and offset
//! pagination over the in-memory item collection. Pure functions; the HTTP
//! layer supplies the collection and the raw parameters.

use crate::catalog::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use crate::error::{CatalogError, Result};
use crate::models::{Item, Pagination};

// == Page Request ==
/// Validated list-query parameters.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,
    /// Page size, within 1..=MAX_LIMIT
    pub limit: usize,
    /// Search needle; `None` when absent or empty
    pub q: Option<String>,
}

impl PageRequest {
    // == Parse ==
    /// Validates raw query-string values into a `PageRequest`.
    ///
    /// `page` defaults to 1 and must parse to an integer >= 1; `limit`
    /// defaults to 10 and must parse to an integer in [1,100]. Each violation
    /// yields its own `InvalidParameter` message. An empty `q` is treated the
    /// same as an absent one.
    pub fn parse(page: Option<&str>, limit: Option<&str>, q: Option<String>) -> Result<Self> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|&page| page >= 1)
                .ok_or_else(|| {
                    CatalogError::InvalidParameter("Invalid page parameter".to_string())
                })?,
        };

        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|&limit| (1..=MAX_LIMIT).contains(&limit))
                .ok_or_else(|| {
                    CatalogError::InvalidParameter(
                        "Invalid limit parameter. Must be between 1 and 100".to_string(),
                    )
                })?,
        };

        Ok(Self {
            page,
            limit,
            q: q.filter(|q| !q.is_empty()),
        })
    }
}

// == Run Query ==
/// Filters and paginates the collection.
///
/// Filter step: an item survives iff there is no query, or the lower-cased
/// query is a substring of its lower-cased name or category. Document order
/// is preserved; there is no ranking.
///
/// Paginate step: `totalPages = ceil(total / limit)`, the slice starts at
/// `(page - 1) * limit`. Pages beyond the end yield an empty slice rather
/// than an error.
pub fn run_query(items: Vec<Item>, request: &PageRequest) -> (Vec<Item>, Pagination) {
    let filtered: Vec<Item> = match request.q.as_deref() {
        Some(q) => {
            let needle = q.to_lowercase();
            items.into_iter().filter(|item| item.matches(&needle)).collect()
        }
        None => items,
    };

    let total = filtered.len();
    let total_pages = total.div_ceil(request.limit);
    let start = (request.page - 1).saturating_mul(request.limit);

    let page_items: Vec<Item> = filtered
        .into_iter()
        .skip(start)
        .take(request.limit)
        .collect();

    let pagination = Pagination {
        total,
        page: request.page,
        limit: request.limit,
        total_pages,
    };

    (page_items, pagination)
}
