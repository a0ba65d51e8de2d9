//! Stats Cache Module
//!
//! Single-slot memoized aggregate over the item collection, invalidated by
//! comparing the backing document's modification timestamp.

use std::time::SystemTime;

use serde::Serialize;

use crate::models::Item;

// == Item Stats ==
/// Derived aggregate over the full collection. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStats {
    /// Number of items in the collection
    pub total: usize,
    /// Mean price; items without a price count as 0 toward the sum
    pub average_price: f64,
}

impl ItemStats {
    // == Compute ==
    /// Recomputes the aggregate from the full collection.
    ///
    /// The average is 0 for an empty collection.
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len();
        let average_price = if total == 0 {
            0.0
        } else {
            let sum: f64 = items.iter().map(|item| item.price.unwrap_or(0.0)).sum();
            sum / total as f64
        };

        Self {
            total,
            average_price,
        }
    }
}

// == Stats Cache ==
/// Two states: empty, or populated with a value and the modification
/// timestamp of the document it was computed from.
///
/// The observed timestamp is passed in by the caller rather than read here,
/// so staleness is testable without real file-system timing. The slot is a
/// plain memo: callers probe with `get_if_fresh`, recompute on a miss, and
/// store with `update`. Nothing suppresses concurrent recomputes during a
/// miss; each request recomputes independently and the last store wins.
#[derive(Debug, Default)]
pub struct StatsCache {
    slot: Option<CachedStats>,
}

#[derive(Debug, Clone)]
struct CachedStats {
    stats: ItemStats,
    source_mtime: Option<SystemTime>,
}

impl StatsCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get If Fresh ==
    /// Returns the cached value when it is still keyed to `observed_mtime`.
    ///
    /// Misses when the slot is empty, when the stored timestamp differs, or
    /// when either timestamp is unobtainable — a missing file always forces
    /// the recompute (which will then surface the underlying read error).
    pub fn get_if_fresh(&self, observed_mtime: Option<SystemTime>) -> Option<ItemStats> {
        let cached = self.slot.as_ref()?;
        if cached.source_mtime.is_some() && cached.source_mtime == observed_mtime {
            Some(cached.stats.clone())
        } else {
            None
        }
    }

    // == Update ==
    /// Stores a freshly computed value keyed to the timestamp it was read at.
    pub fn update(&mut self, stats: ItemStats, observed_mtime: Option<SystemTime>) {
        self.slot = Some(CachedStats {
            stats,
            source_mtime: observed_mtime,
        });
    }

    // == Is Populated ==
    /// True once any value has been stored.
    pub fn is_populated(&self) -> bool {
        self.slot.is_some()
    }
}
