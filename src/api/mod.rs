//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /api/items` - Paginated, searchable item list
//! - `POST /api/items` - Create an item
//! - `GET /api/items/:id` - Retrieve an item by id
//! - `GET /api/stats` - Collection statistics (memoized)
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
