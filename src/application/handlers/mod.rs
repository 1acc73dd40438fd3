//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod request;
pub mod restaurant;
pub mod table;

pub use request::{
    AuthorizeDashboardHandler, AuthorizeDashboardQuery, CreateServiceRequestCommand,
    CreateServiceRequestHandler, CreateServiceRequestResult, DeleteRequestCommand,
    DeleteRequestHandler, GetRequestHandler, GetRequestQuery, ListRequestsHandler,
    ListRequestsQuery, UpdateRequestStatusCommand, UpdateRequestStatusHandler,
};
pub use restaurant::{
    CreateBranchCommand, CreateBranchHandler, CreateRestaurantCommand, CreateRestaurantHandler,
    DeleteBranchCommand, DeleteBranchHandler, DeleteRestaurantCommand, DeleteRestaurantHandler,
    GetBranchHandler, GetBranchQuery, GetRestaurantHandler, GetRestaurantQuery,
    ListBranchesHandler, ListBranchesQuery, ListOwnerRestaurantsHandler,
    ListOwnerRestaurantsQuery, SetupRestaurantCommand, SetupRestaurantHandler,
    SetupRestaurantResult, UpdateBranchCommand, UpdateBranchHandler, UpdateRestaurantCommand,
    UpdateRestaurantHandler, MAX_SETUP_TABLES,
};
pub use table::{
    BulkCreateTablesCommand, BulkCreateTablesHandler, DeleteTableCommand, DeleteTableHandler,
    GetTableHandler, GetTableQuery, ListTablesHandler, ListTablesQuery, ProvisionTableCommand,
    ProvisionTableHandler, UpdateTableCommand, UpdateTableHandler, MAX_BULK_TABLES,
};
