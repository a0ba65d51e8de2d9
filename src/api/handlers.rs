//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::catalog::{run_query, ItemStats, ItemStore, PageRequest, StatsCache};
use crate::error::Result;
use crate::models::{HealthResponse, Item, ListQuery, ListResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The store itself is stateless (it holds only the document path) and is
/// deliberately not locked: file access races are an accepted property of
/// the flat-file design. The stats cache is the single piece of process-wide
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Flat-file item store
    pub store: Arc<ItemStore>,
    /// Single-slot memoized stats aggregate
    pub stats: Arc<RwLock<StatsCache>>,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(store: ItemStore) -> Self {
        Self {
            store: Arc::new(store),
            stats: Arc::new(RwLock::new(StatsCache::new())),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(ItemStore::new(&config.data_path))
    }
}

/// Handler for GET /api/items
///
/// Reads the full collection, validates the pagination parameters, then
/// filters and slices. Invalid `page`/`limit` surface as 400 with distinct
/// messages; store failures as 500.
pub async fn list_items_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let items = state.store.read_all().await?;

    let request = PageRequest::parse(params.page.as_deref(), params.limit.as_deref(), params.q)?;
    let (page_items, pagination) = run_query(items, &request);

    Ok(Json(ListResponse {
        items: page_items,
        pagination,
    }))
}

/// Handler for GET /api/items/:id
///
/// Looks an item up by id; 404 with `{"error":"Item not found"}` when absent.
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>> {
    let item = state.store.get_by_id(id).await?;
    Ok(Json(item))
}

/// Handler for POST /api/items
///
/// Appends the submitted object and responds 201 with the stored item,
/// injected id included. No payload validation happens here: any object
/// shape is accepted and persisted as-is.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> Result<(StatusCode, Json<Item>)> {
    let stored = state.store.append(item).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Handler for GET /api/stats
///
/// Serves the memoized aggregate while the backing document's modification
/// time is unchanged; otherwise re-reads the document and recomputes. The
/// cache lock is not held across the recompute, so concurrent requests
/// during a miss each recompute independently — last store wins.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let observed = state.store.mod_time().await;

    if let Some(stats) = state.stats.read().await.get_if_fresh(observed) {
        return Ok(Json(stats.into()));
    }

    let items = state.store.read_all().await?;
    let stats = ItemStats::compute(&items);
    state.stats.write().await.update(stats.clone(), observed);

    Ok(Json(stats.into()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIXTURE: &str = r#"[
        {"id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 2499},
        {"id": 7, "name": "Standing Desk", "category": "Furniture", "price": 119}
    ]"#;

    fn seeded_state(json: &str) -> (AppState, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let state = AppState::new(ItemStore::new(file.path()));
        (state, file)
    }

    fn list_query(page: Option<&str>, limit: Option<&str>, q: Option<&str>) -> ListQuery {
        ListQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
            q: q.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_list_items_handler() {
        let (state, _file) = seeded_state(FIXTURE);

        let response = list_items_handler(State(state), Query(ListQuery::default()))
            .await
            .unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.pagination.total, 2);
        assert_eq!(response.pagination.page, 1);
        assert_eq!(response.pagination.limit, 10);
    }

    #[tokio::test]
    async fn test_list_items_handler_search() {
        let (state, _file) = seeded_state(FIXTURE);

        let response =
            list_items_handler(State(state), Query(list_query(None, None, Some("desk"))))
                .await
                .unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, 7);
    }

    #[tokio::test]
    async fn test_list_items_handler_invalid_page() {
        let (state, _file) = seeded_state(FIXTURE);

        let result =
            list_items_handler(State(state), Query(list_query(Some("invalid"), None, None))).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_item_handler_not_found() {
        let (state, _file) = seeded_state(FIXTURE);

        let result = get_item_handler(State(state), Path(-1)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_item_handler() {
        let (state, _file) = seeded_state("[]");

        let (status, response) = create_item_handler(
            State(state.clone()),
            Json(Item::new(0, "Mechanical Keyboard", "Electronics", 149.0)),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert!(response.id > 0);

        let listed = list_items_handler(State(state), Query(ListQuery::default()))
            .await
            .unwrap();
        assert_eq!(listed.items.len(), 1);
    }

    #[tokio::test]
    async fn test_stats_handler_empty_collection() {
        let (state, _file) = seeded_state("[]");

        let response = stats_handler(State(state)).await.unwrap();
        assert_eq!(response.total, 0);
        assert_eq!(response.average_price, 0.0);
    }

    #[tokio::test]
    async fn test_stats_handler_populates_cache() {
        let (state, _file) = seeded_state(FIXTURE);

        let response = stats_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.average_price, 1309.0);
        assert!(state.stats.read().await.is_populated());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
