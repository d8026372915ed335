//! HTTP route handlers.
//!
//! One module per endpoint family. Every handler is a pure function of
//! its validated path parameter and the seeded [`Catalog`]; path
//! coercion failures (non-integer ids, unknown food types) are rejected
//! by axum's `Path` extractor before any handler runs.

mod coupons;
mod fallback;
mod foods;
mod health;
mod hello;
mod items;
mod users;

pub use fallback::fallback_handler;
pub use foods::FoodType;
pub use health::health_routes;

use axum::routing::get;
use axum::Router;

use crate::Catalog;

/// All five API routes, bound to the given catalog.
pub fn api_routes(catalog: Catalog) -> Router {
    Router::new()
        .route("/", get(hello::root))
        .route("/items/{item_id}", get(items::read_item))
        .route("/users/{name}", get(users::get_user))
        .route("/foods/{food_type}", get(foods::get_food))
        .route("/cupons/{cupon_id}", get(coupons::get_cupon))
        .with_state(catalog)
}
