//! Integration Tests for the Client Layer
//!
//! Runs the real server on an ephemeral port and drives the data context
//! against it, the way the list and detail views do.

use std::io::Write;

use item_catalog::{
    api::create_router,
    catalog::ItemStore,
    client::{views, DataContext, FetchOptions},
    AppState,
};
use tempfile::NamedTempFile;

const FIXTURE: &str = r#"[
    {"id": 1, "name": "Laptop Pro", "category": "Electronics", "price": 2499},
    {"id": 2, "name": "Noise Cancelling Headphones", "category": "Electronics", "price": 399},
    {"id": 3, "name": "Ultra-Wide Monitor", "category": "Electronics", "price": 999},
    {"id": 6, "name": "Ergonomic Chair", "category": "Furniture", "price": 799},
    {"id": 7, "name": "Standing Desk", "category": "Furniture", "price": 119}
]"#;

/// Serves the router on 127.0.0.1:0 and returns its base URL.
async fn spawn_server(document: &str) -> (String, NamedTempFile) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(document.as_bytes()).unwrap();

    let state = AppState::new(ItemStore::new(file.path()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), file)
}

#[tokio::test]
async fn test_fetch_items_updates_state() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let mut context = DataContext::new(base_url);

    let data = context.fetch_items(&FetchOptions::default()).await.unwrap();

    assert_eq!(data.items.len(), 5);
    assert_eq!(context.items.len(), 5);
    assert_eq!(context.pagination.total, 5);
    assert_eq!(context.pagination.total_pages, 1);
    assert!(!context.loading);
    assert!(context.error.is_none());
}

#[tokio::test]
async fn test_search_resets_to_first_page() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let mut context = DataContext::new(base_url);

    // Land on page 2 first, then search; the query must restart from page 1.
    context
        .fetch_items(&FetchOptions {
            page: 2,
            limit: 2,
            q: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(context.pagination.page, 2);

    context.search("monitor").await.unwrap();

    assert_eq!(context.pagination.page, 1);
    assert_eq!(context.pagination.total, 1);
    assert_eq!(context.items[0].name.as_deref(), Some("Ultra-Wide Monitor"));
}

#[tokio::test]
async fn test_fetch_failure_sets_error_and_propagates() {
    let (base_url, _file) = spawn_server("!@#$%").await;
    let mut context = DataContext::new(base_url);

    let result = context.fetch_items(&FetchOptions::default()).await;

    assert!(result.is_err());
    assert_eq!(context.error.as_deref(), Some("API error: 500"));
    assert!(!context.loading);
}

#[tokio::test]
async fn test_invalid_limit_surfaces_as_api_error() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let mut context = DataContext::new(base_url);

    let result = context
        .fetch_items(&FetchOptions {
            page: 1,
            limit: 101,
            q: String::new(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(context.error.as_deref(), Some("API error: 400"));
}

#[tokio::test]
async fn test_detail_view_flow() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let context = DataContext::new(base_url);

    let item = context.fetch_item(7).await.unwrap();
    let rendered = views::render_detail(&item);

    assert!(rendered.contains("Standing Desk"));
    assert!(rendered.contains("Category: Furniture"));
}

#[tokio::test]
async fn test_detail_fetch_missing_item_maps_to_banner() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let context = DataContext::new(base_url);

    // The detail view shows one fixed banner for any fetch failure.
    let banner = match context.fetch_item(-1).await {
        Ok(_) => panic!("expected a 404"),
        Err(_) => views::render_error_banner(views::DETAIL_LOAD_ERROR),
    };

    assert!(banner.contains("Failed to load item details"));
}

#[tokio::test]
async fn test_fetch_stats() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let context = DataContext::new(base_url);

    let stats = context.fetch_stats().await.unwrap();

    assert_eq!(stats.total, 5);
    let expected = (2499.0 + 399.0 + 999.0 + 799.0 + 119.0) / 5.0;
    assert!((stats.average_price - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_rendered_list_view() {
    let (base_url, _file) = spawn_server(FIXTURE).await;
    let mut context = DataContext::new(base_url);

    context
        .fetch_items(&FetchOptions {
            page: 1,
            limit: 2,
            q: String::new(),
        })
        .await
        .unwrap();

    let rendered = views::render_list(&context.items, &context.pagination);

    assert!(rendered.contains("Laptop Pro"));
    assert!(rendered.contains("page 1 of 3 (5 items)"));
}
