//! Assembles the HTTP API: feature routers, auth, tracing, CORS, timeouts.

use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::websocket::{websocket_router, WebSocketState};

use super::middleware::{auth_middleware, AuthState};
use super::request::{public_request_routes, request_routes, RequestHandlers};
use super::restaurant::{branch_routes, restaurant_routes, BranchHandlers, RestaurantHandlers};
use super::table::{table_routes, TableHandlers};

/// Everything the API needs to serve requests.
#[derive(Clone)]
pub struct ApiState {
    pub restaurants: RestaurantHandlers,
    pub branches: BranchHandlers,
    pub tables: TableHandlers,
    pub requests: RequestHandlers,
    pub websocket: WebSocketState,
    pub auth: AuthState,
}

/// Cross-cutting HTTP settings.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Allowed CORS origins; empty or `*` allows any.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Builds the full application router.
///
/// ```text
/// GET  /health
/// POST /api/v1/public/request-account
///      /api/v1/restaurants[/setup|/:id]                  (authenticated)
///      /api/v1/branches[/:id|/restaurant/:id]
///      /api/v1/tables[/bulk|/:id|/restaurant/:id]
///      /api/v1/requests[/:id[/status]|/restaurant/:id[/pending]]
/// GET  /api/v1/requests/ws/:restaurant_id               (WebSocket)
/// ```
pub fn api_router(state: ApiState, settings: &RouterSettings) -> Router {
    let api = Router::new()
        .nest("/public", public_request_routes(state.requests.clone()))
        .nest("/restaurants", restaurant_routes(state.restaurants))
        .nest("/branches", branch_routes(state.branches))
        .nest("/tables", table_routes(state.tables))
        .nest(
            "/requests",
            request_routes(state.requests).merge(websocket_router(state.websocket)),
        )
        .layer(middleware::from_fn_with_state(state.auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(parsed))
}
