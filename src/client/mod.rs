//! Client Module
//!
//! The consumer side of the catalog API: a data context holding the fetched
//! list state, a keystroke debouncer for search input, and plain-text views
//! for the list and detail screens.

mod context;
mod debounce;
pub mod views;

pub use context::{DataContext, FetchOptions};
pub use debounce::Debouncer;

use std::time::Duration;

// == Public Constants ==
/// Quiet period before a search keystroke triggers a refetch
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
