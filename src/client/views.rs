//! Views Module
//!
//! Plain-text renderings of the list and detail screens, including the
//! loading and error states the data context exposes.

use crate::models::{Item, Pagination};

/// Banner text for a detail fetch that failed, whatever the cause.
pub const DETAIL_LOAD_ERROR: &str = "Failed to load item details";

// == Loading ==
/// Placeholder shown while a fetch is in flight.
pub fn render_loading() -> String {
    "Loading...".to_string()
}

// == Error Banner ==
pub fn render_error_banner(message: &str) -> String {
    format!("error: {message}")
}

// == List View ==
/// One line per item plus a pagination footer.
pub fn render_list(items: &[Item], pagination: &Pagination) -> String {
    let mut out = String::new();

    if items.is_empty() {
        out.push_str("No items found.\n");
    } else {
        for item in items {
            let name = item.name.as_deref().unwrap_or("(unnamed)");
            let category = item.category.as_deref().unwrap_or("-");
            let price = item
                .price
                .map(|price| format!("${price}"))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("{:>14}  {name} [{category}] {price}\n", item.id));
        }
    }

    out.push_str(&format!(
        "page {} of {} ({} items)\n",
        pagination.page, pagination.total_pages, pagination.total
    ));

    out
}

// == Detail View ==
pub fn render_detail(item: &Item) -> String {
    let name = item.name.as_deref().unwrap_or("(unnamed)");
    let category = item.category.as_deref().unwrap_or("-");
    let price = item
        .price
        .map(|price| format!("${price}"))
        .unwrap_or_else(|| "-".to_string());

    format!("{name}\nCategory: {category}\nPrice: {price}\n")
}
