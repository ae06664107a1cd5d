//! # HTTP Layer
//!
//! [`build_router`] assembles the full application: the collection routes,
//! the `GET /` banner, optional static images, and the middleware stack.
//!
//! The middleware stack, outermost first:
//!
//! 1. CORS (answers preflight requests itself)
//! 2. Set `x-request-id` on incoming requests
//! 3. Propagate `x-request-id` to the response
//! 4. Request logging
//! 5. Panic recovery (500 with the JSON error body)

pub mod error;
pub mod request_log;
pub mod routes;
pub mod state;

use std::any::Any;

use axum::handler::HandlerWithoutStateExt;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;

use crate::config::CatalogConfig;
use crate::profile::ROUTE_NOT_FOUND;
use error::ApiError;
use state::AppState;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full application [`Router`] with all middleware layers.
pub fn build_router(state: AppState, config: &CatalogConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let collection_path = state.profile().collection_path.clone();

    let mut router = Router::new()
        .merge(routes::index::routes())
        .merge(routes::instruments::routes(&collection_path))
        .fallback(route_not_found)
        .with_state(state);

    if let Some(dir) = &config.images_dir {
        let images = ServeDir::new(dir).not_found_service(route_not_found.into_service());
        router = router.nest_service("/images", images);
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_log::log_request))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(build_cors_layer(&config.cors_allowed_origins))
}

/// Build the CORS layer. Origins are validated when the configuration is
/// loaded; an origin that still fails to parse is skipped.
pub fn build_cors_layer(allowed_origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if allowed_origins.trim() == "*" {
        return cors.allow_origin(AnyOrigin);
    }

    let origins: Vec<_> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    cors.allow_origin(origins)
}

/// Fallback for unknown paths and unsupported methods.
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND.to_string())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
