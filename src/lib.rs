//! # food-court
//!
//! A small axum demo API: a hello-world root, two echo endpoints, an
//! enum-validated food-type endpoint, and a coupon lookup backed by a
//! static in-memory table.
//!
//! All data is seeded once at startup and never mutated; handlers are
//! pure reads. The interesting parts live in [`routes`] and [`catalog`],
//! everything else is server plumbing (config, logging, middleware,
//! graceful shutdown).

pub mod catalog;
pub mod config;
pub mod error;
mod layer;
pub mod logging;
pub mod routes;
pub mod server;

pub use catalog::Catalog;
pub use config::{ConfigError, Environment, ServerConfig};
pub use error::ErrorResponse;
pub use server::ServerError;

use axum::Router;

/// Builds the full application router: API routes over a seeded
/// [`Catalog`], plus health check, JSON 404 fallback, and the default
/// middleware stack.
pub fn app(config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(routes::api_routes(Catalog::seed()))
        .merge(routes::health_routes())
        .fallback(routes::fallback_handler);

    layer::default_layers(router, config)
}
