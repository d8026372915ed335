mod error_body;
mod trace;

use axum::http::StatusCode;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::ServerConfig;

pub use error_body::ErrorBodyLayer;

/// Applies the default middleware stack to a router.
///
/// The last layer added is outermost; `ErrorBodyLayer` goes last so it
/// shapes every error response, including panics and timeouts produced
/// by the layers beneath it.
pub(crate) fn default_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace::trace_layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(ErrorBodyLayer::new(config.environment))
}
