//! Item Model
//!
//! The domain record stored in the backing JSON document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Item ==
/// A single catalog item.
///
/// The backing document is an ordered JSON array of these records. Payload
/// validation is deliberately absent: `name`, `category` and `price` are
/// optional at the serde level, and any fields beyond them are preserved
/// verbatim through `extra`, so an object of any shape can be stored and read
/// back exactly as submitted (plus the injected `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique-ish identifier, assigned as epoch milliseconds at creation.
    /// Uniqueness is not enforced; rapid successive creates can collide.
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Fields outside the known shape, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates a fully-shaped item. Mostly useful in tests and fixtures.
    pub fn new(id: i64, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: Some(name.into()),
            category: Some(category.into()),
            price: Some(price),
            extra: Map::new(),
        }
    }

    // == Matches ==
    /// Case-insensitive substring test against name OR category.
    ///
    /// `needle` must already be lower-cased by the caller. Items missing a
    /// field simply don't match on it; there is no trimming or tokenization.
    pub fn matches(&self, needle: &str) -> bool {
        let name_hit = self
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(needle));
        let category_hit = self
            .category
            .as_deref()
            .is_some_and(|category| category.to_lowercase().contains(needle));

        name_hit || category_hit
    }
}
