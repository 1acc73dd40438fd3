//! HTTP routes for service request endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_service_request, delete_request, get_request, list_pending_requests, list_requests,
    update_request_status, RequestHandlers,
};

/// Unauthenticated routes, nested under `/api/v1/public`.
pub fn public_request_routes(handlers: RequestHandlers) -> Router {
    Router::new()
        .route("/request-account", post(create_service_request))
        .with_state(handlers)
}

/// Owner routes, nested under `/api/v1/requests`.
pub fn request_routes(handlers: RequestHandlers) -> Router {
    Router::new()
        .route("/restaurant/:restaurant_id", get(list_requests))
        .route("/restaurant/:restaurant_id/pending", get(list_pending_requests))
        .route("/:id", get(get_request).delete(delete_request))
        .route("/:id/status", put(update_request_status))
        .with_state(handlers)
}
