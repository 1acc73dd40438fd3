//! Composition root: wires repositories, the hub, handlers and the router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;

use crate::adapters::http::{
    api_router, middleware::AuthState, ApiState, BranchHandlers, RequestHandlers,
    RestaurantHandlers, RouterSettings, TableHandlers,
};
use crate::adapters::memory::{
    InMemoryBranchRepository, InMemoryRequestRepository, InMemoryRestaurantRepository,
    InMemoryTableRepository,
};
use crate::adapters::postgres::{
    PostgresBranchRepository, PostgresRequestRepository, PostgresRestaurantRepository,
    PostgresTableRepository,
};
use crate::adapters::websocket::{NotificationHub, WebSocketState, DEFAULT_OUTBOUND_CAPACITY};
use crate::application::handlers::request::{
    AuthorizeDashboardHandler, CreateServiceRequestHandler, DeleteRequestHandler,
    GetRequestHandler, ListRequestsHandler, UpdateRequestStatusHandler, DEFAULT_QUERY_TIMEOUT,
};
use crate::application::handlers::restaurant::{
    CreateBranchHandler, CreateRestaurantHandler, DeleteBranchHandler, DeleteRestaurantHandler,
    GetBranchHandler, GetRestaurantHandler, ListBranchesHandler, ListOwnerRestaurantsHandler,
    SetupRestaurantHandler, UpdateBranchHandler, UpdateRestaurantHandler,
};
use crate::application::handlers::table::{
    BulkCreateTablesHandler, DeleteTableHandler, GetTableHandler, ListTablesHandler,
    ProvisionTableHandler, UpdateTableHandler,
};
use crate::ports::{
    BranchRepository, NotificationPublisher, RequestRepository, RestaurantRepository,
    TableRepository,
};

/// The four storage ports, backed by one store.
#[derive(Clone)]
pub struct Repositories {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub branches: Arc<dyn BranchRepository>,
    pub tables: Arc<dyn TableRepository>,
    pub requests: Arc<dyn RequestRepository>,
}

impl Repositories {
    /// Process-local maps; contents vanish on restart.
    pub fn in_memory() -> Self {
        Self {
            restaurants: Arc::new(InMemoryRestaurantRepository::new()),
            branches: Arc::new(InMemoryBranchRepository::new()),
            tables: Arc::new(InMemoryTableRepository::new()),
            requests: Arc::new(InMemoryRequestRepository::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            restaurants: Arc::new(PostgresRestaurantRepository::new(pool.clone())),
            branches: Arc::new(PostgresBranchRepository::new(pool.clone())),
            tables: Arc::new(PostgresTableRepository::new(pool.clone())),
            requests: Arc::new(PostgresRequestRepository::new(pool)),
        }
    }
}

/// Knobs that shape the wiring.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub qr_base_url: String,
    pub query_timeout: Duration,
    pub outbound_buffer_capacity: usize,
    pub router: RouterSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            qr_base_url: "http://localhost:5173".to_string(),
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            outbound_buffer_capacity: DEFAULT_OUTBOUND_CAPACITY,
            router: RouterSettings::default(),
        }
    }
}

/// A fully wired application.
pub struct App {
    pub hub: Arc<NotificationHub>,
    pub router: Router,
}

impl App {
    pub fn build(repos: Repositories, validator: AuthState, settings: AppSettings) -> Self {
        let hub = Arc::new(NotificationHub::new(settings.outbound_buffer_capacity));
        let publisher: Arc<dyn NotificationPublisher> = hub.clone();

        let restaurants = RestaurantHandlers::new(
            Arc::new(CreateRestaurantHandler::new(repos.restaurants.clone())),
            Arc::new(ListOwnerRestaurantsHandler::new(repos.restaurants.clone())),
            Arc::new(GetRestaurantHandler::new(repos.restaurants.clone())),
            Arc::new(UpdateRestaurantHandler::new(repos.restaurants.clone())),
            Arc::new(DeleteRestaurantHandler::new(repos.restaurants.clone())),
            Arc::new(SetupRestaurantHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
                repos.tables.clone(),
                settings.qr_base_url.clone(),
            )),
        );

        let branches = BranchHandlers::new(
            Arc::new(CreateBranchHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
            )),
            Arc::new(ListBranchesHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
            )),
            Arc::new(GetBranchHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
            )),
            Arc::new(UpdateBranchHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
            )),
            Arc::new(DeleteBranchHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
            )),
        );

        let tables = TableHandlers::new(
            Arc::new(ProvisionTableHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
                repos.tables.clone(),
                settings.qr_base_url.clone(),
            )),
            Arc::new(BulkCreateTablesHandler::new(
                repos.restaurants.clone(),
                repos.branches.clone(),
                repos.tables.clone(),
                settings.qr_base_url.clone(),
            )),
            Arc::new(ListTablesHandler::new(
                repos.restaurants.clone(),
                repos.tables.clone(),
            )),
            Arc::new(GetTableHandler::new(
                repos.restaurants.clone(),
                repos.tables.clone(),
            )),
            Arc::new(UpdateTableHandler::new(
                repos.restaurants.clone(),
                repos.tables.clone(),
                settings.qr_base_url.clone(),
            )),
            Arc::new(DeleteTableHandler::new(
                repos.restaurants.clone(),
                repos.tables.clone(),
            )),
        );

        let create_request = CreateServiceRequestHandler::new(
            repos.restaurants.clone(),
            repos.branches.clone(),
            repos.tables.clone(),
            repos.requests.clone(),
            publisher,
        )
        .with_query_timeout(settings.query_timeout);

        let requests = RequestHandlers::new(
            Arc::new(create_request),
            Arc::new(ListRequestsHandler::new(
                repos.restaurants.clone(),
                repos.requests.clone(),
            )),
            Arc::new(GetRequestHandler::new(
                repos.restaurants.clone(),
                repos.requests.clone(),
            )),
            Arc::new(UpdateRequestStatusHandler::new(
                repos.restaurants.clone(),
                repos.requests.clone(),
            )),
            Arc::new(DeleteRequestHandler::new(
                repos.restaurants.clone(),
                repos.requests.clone(),
            )),
        );

        let websocket = WebSocketState::new(
            hub.clone(),
            Arc::new(AuthorizeDashboardHandler::new(repos.restaurants.clone())),
        );

        let state = ApiState {
            restaurants,
            branches,
            tables,
            requests,
            websocket,
            auth: validator,
        };

        Self {
            router: api_router(state, &settings.router),
            hub,
        }
    }
}
