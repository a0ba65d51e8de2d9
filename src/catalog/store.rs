//! Item Store Module
//!
//! Whole-document JSON persistence for the item collection.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::Utc;
use tokio::fs;

use crate::error::{CatalogError, Result};
use crate::models::Item;

// == Item Store ==
/// Reads and writes the item collection as a single JSON document.
///
/// The document is the sole source of truth; there is no index and no lock.
/// Writes rewrite the whole file, so concurrent writers race (last one wins)
/// and a reader overlapping a write may observe a truncated document. That is
/// an accepted property of this store, not something it guards against.
#[derive(Debug, Clone)]
pub struct ItemStore {
    /// Path to the backing JSON document
    path: PathBuf,
}

impl ItemStore {
    // == Constructor ==
    /// Creates a store over the given document path.
    ///
    /// The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // == Read All ==
    /// Loads and parses the full item collection.
    ///
    /// Fails with `Io` if the file is unreadable and `Parse` if its contents
    /// are not a JSON array of objects.
    pub async fn read_all(&self) -> Result<Vec<Item>> {
        let raw = fs::read_to_string(&self.path).await?;
        let items = serde_json::from_str(&raw)?;
        Ok(items)
    }

    // == Get By Id ==
    /// Returns the first item whose id matches, or `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<Item> {
        let items = self.read_all().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::NotFound)
    }

    // == Append ==
    /// Assigns a fresh id, appends the item, and rewrites the document.
    ///
    /// The id is the current epoch-millisecond timestamp, which matches the
    /// rest of the document's ids but can collide under rapid successive
    /// creates. Returns the stored item, id included.
    pub async fn append(&self, mut item: Item) -> Result<Item> {
        let mut items = self.read_all().await?;

        item.id = Utc::now().timestamp_millis();
        items.push(item.clone());

        let raw = serde_json::to_string_pretty(&items)?;
        fs::write(&self.path, raw).await?;

        Ok(item)
    }

    // == Modification Time ==
    /// Last-modified timestamp of the backing document.
    ///
    /// `None` when the metadata is unobtainable (e.g. the file is missing),
    /// which the stats cache treats as a forced miss.
    pub async fn mod_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path)
            .await
            .ok()
            .and_then(|meta| meta.modified().ok())
    }
}
