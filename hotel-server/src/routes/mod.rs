use std::time::Duration;

use axum::Router;
use http::{HeaderName, HeaderValue, Uri};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::auth::require_token;
use crate::core::ServerState;
use shared::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Accounts API - public (login / register)
        .merge(api::accounts::router())
        // Rooms API - read only
        .merge(api::rooms::router())
        // Room types API
        .merge(api::room_types::router())
        // Bookings API
        .merge(api::bookings::router())
        // Reservation fee API
        .merge(api::reservation_fee::router())
        // Health API - public route
        .merge(api::health::router())
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and oneshot tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        // ========== Application Middleware ==========
        // Token presence check on mutating API routes
        .layer(axum::middleware::from_fn(require_token))
        // ========== Tower HTTP Middleware ==========
        // Concurrency limit - queue requests beyond the configured maximum
        .layer(ConcurrencyLimitLayer::new(
            state.config.max_concurrent_requests,
        ))
        // Timeout - answer 408 when a handler runs too long
        .layer(TimeoutLayer::new(timeout))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - Generate unique ID for each request, outermost
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
