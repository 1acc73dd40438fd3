//! HTTP routes for table endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    bulk_create_tables, create_table, delete_table, get_table, list_tables, update_table,
    TableHandlers,
};

/// Nested under `/api/v1/tables`.
pub fn table_routes(handlers: TableHandlers) -> Router {
    Router::new()
        .route("/", post(create_table))
        .route("/bulk", post(bulk_create_tables))
        .route("/restaurant/:restaurant_id", get(list_tables))
        .route(
            "/:id",
            get(get_table).put(update_table).delete(delete_table),
        )
        .with_state(handlers)
}
