//! Data Context Module
//!
//! Client-side state holder over the catalog API: tracks the current page of
//! items, the pagination envelope, and loading/error flags across fetches.

use anyhow::{bail, Result};

use crate::models::{Item, ListResponse, Pagination, StatsResponse};

// == Fetch Options ==
/// Parameters for a list fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// 1-based page number
    pub page: usize,
    /// Page size
    pub limit: usize,
    /// Search query; empty means unfiltered
    pub q: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page: 1,
            limit: crate::catalog::DEFAULT_LIMIT,
            q: String::new(),
        }
    }
}

// == Data Context ==
/// Fetch wrapper plus the state the views render from.
///
/// Every fetch updates `loading` and `error`; a failed fetch records its
/// message in `error` AND returns it, so callers can layer their own
/// handling on top of the shared state.
#[derive(Debug)]
pub struct DataContext {
    http: reqwest::Client,
    base_url: String,
    /// Current page of items
    pub items: Vec<Item>,
    /// Envelope for the current page
    pub pagination: Pagination,
    /// True while a list fetch is in flight
    pub loading: bool,
    /// Message from the most recent failed fetch, cleared on the next one
    pub error: Option<String>,
}

impl DataContext {
    // == Constructor ==
    /// Creates a context against a server base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            items: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            error: None,
        }
    }

    // == Fetch Items ==
    /// Issues the list request and updates the held state.
    ///
    /// On success the items and pagination envelope replace the current
    /// state. On failure the message lands in `error` and the error is
    /// returned to the caller as well.
    pub async fn fetch_items(&mut self, options: &FetchOptions) -> Result<ListResponse> {
        self.loading = true;
        self.error = None;

        let result = self.request_items(options).await;
        self.loading = false;

        match result {
            Ok(data) => {
                self.items = data.items.clone();
                self.pagination = data.pagination.clone();
                Ok(data)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    // == Search ==
    /// List fetch for a (debounced) search input.
    ///
    /// A new query always restarts from the first page, keeping the current
    /// page size.
    pub async fn search(&mut self, q: &str) -> Result<ListResponse> {
        let options = FetchOptions {
            page: 1,
            limit: self.pagination.limit,
            q: q.to_string(),
        };
        self.fetch_items(&options).await
    }

    // == Fetch Item ==
    /// Fetches a single item for the detail view.
    pub async fn fetch_item(&self, id: i64) -> Result<Item> {
        let url = format!("{}/api/items/{}", self.base_url, id);
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            bail!("API error: {}", response.status().as_u16());
        }

        Ok(response.json().await?)
    }

    // == Fetch Stats ==
    /// Fetches the collection statistics.
    pub async fn fetch_stats(&self) -> Result<StatsResponse> {
        let url = format!("{}/api/stats", self.base_url);
        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            bail!("API error: {}", response.status().as_u16());
        }

        Ok(response.json().await?)
    }

    async fn request_items(&self, options: &FetchOptions) -> Result<ListResponse> {
        let mut query = vec![
            ("page", options.page.to_string()),
            ("limit", options.limit.to_string()),
        ];
        if !options.q.is_empty() {
            query.push(("q", options.q.clone()));
        }

        let url = format!("{}/api/items", self.base_url);
        let response = self.http.get(url).query(&query).send().await?;

        if !response.status().is_success() {
            bail!("API error: {}", response.status().as_u16());
        }

        Ok(response.json().await?)
    }
}
