//! HTTP handlers for table endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::table::{
    BulkCreateTablesCommand, BulkCreateTablesHandler, DeleteTableCommand, DeleteTableHandler,
    GetTableHandler, GetTableQuery, ListTablesHandler, ListTablesQuery, ProvisionTableCommand,
    ProvisionTableHandler, UpdateTableCommand, UpdateTableHandler,
};
use crate::domain::foundation::{BranchId, RestaurantId, TableId, ValidationError};
use crate::domain::table::TableError;

use super::dto::{BulkCreateTablesRequest, CreateTableRequest, TableResponse, UpdateTableRequest};

#[derive(Clone)]
pub struct TableHandlers {
    provision_handler: Arc<ProvisionTableHandler>,
    bulk_handler: Arc<BulkCreateTablesHandler>,
    list_handler: Arc<ListTablesHandler>,
    get_handler: Arc<GetTableHandler>,
    update_handler: Arc<UpdateTableHandler>,
    delete_handler: Arc<DeleteTableHandler>,
}

impl TableHandlers {
    pub fn new(
        provision_handler: Arc<ProvisionTableHandler>,
        bulk_handler: Arc<BulkCreateTablesHandler>,
        list_handler: Arc<ListTablesHandler>,
        get_handler: Arc<GetTableHandler>,
        update_handler: Arc<UpdateTableHandler>,
        delete_handler: Arc<DeleteTableHandler>,
    ) -> Self {
        Self {
            provision_handler,
            bulk_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

fn parse_location(
    restaurant_id: String,
    branch_id: String,
) -> Result<(RestaurantId, BranchId), ValidationError> {
    Ok((RestaurantId::new(restaurant_id)?, BranchId::new(branch_id)?))
}

/// POST /api/v1/tables - Provision a table and issue its QR code.
pub async fn create_table(
    State(handlers): State<TableHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateTableRequest>,
) -> Response {
    let (restaurant_id, branch_id) = match parse_location(req.restaurant_id, req.branch_id) {
        Ok(ids) => ids,
        Err(e) => return handle_table_error(e.into()),
    };

    let cmd = ProvisionTableCommand {
        owner_id: user.id,
        restaurant_id,
        branch_id,
        number: req.number,
        capacity: req.capacity,
    };
    match handlers.provision_handler.handle(cmd).await {
        Ok(table) => (StatusCode::CREATED, Json(TableResponse::from(&table))).into_response(),
        Err(e) => handle_table_error(e),
    }
}

/// POST /api/v1/tables/bulk - Adds `count` tables numbered after the highest one.
pub async fn bulk_create_tables(
    State(handlers): State<TableHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<BulkCreateTablesRequest>,
) -> Response {
    let (restaurant_id, branch_id) = match parse_location(req.restaurant_id, req.branch_id) {
        Ok(ids) => ids,
        Err(e) => return handle_table_error(e.into()),
    };

    let cmd = BulkCreateTablesCommand {
        owner_id: user.id,
        restaurant_id,
        branch_id,
        count: req.count,
        capacity: req.capacity,
    };
    match handlers.bulk_handler.handle(cmd).await {
        Ok(tables) => {
            let body: Vec<TableResponse> = tables.iter().map(TableResponse::from).collect();
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(e) => handle_table_error(e),
    }
}

/// GET /api/v1/tables/restaurant/:restaurant_id
pub async fn list_tables(
    State(handlers): State<TableHandlers>,
    RequireAuth(user): RequireAuth,
    Path(restaurant_id): Path<String>,
) -> Response {
    let restaurant_id = match RestaurantId::new(restaurant_id) {
        Ok(id) => id,
        Err(e) => return handle_table_error(e.into()),
    };

    let query = ListTablesQuery {
        owner_id: user.id,
        restaurant_id,
    };
    match handlers.list_handler.handle(query).await {
        Ok(tables) => {
            let body: Vec<TableResponse> = tables.iter().map(TableResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_table_error(e),
    }
}

/// GET /api/v1/tables/:id
pub async fn get_table(
    State(handlers): State<TableHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let table_id = match TableId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_table_error(e.into()),
    };

    let query = GetTableQuery {
        owner_id: user.id,
        table_id,
    };
    match handlers.get_handler.handle(query).await {
        Ok(table) => (StatusCode::OK, Json(TableResponse::from(&table))).into_response(),
        Err(e) => handle_table_error(e),
    }
}

/// PUT /api/v1/tables/:id
pub async fn update_table(
    State(handlers): State<TableHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateTableRequest>,
) -> Response {
    let table_id = match TableId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_table_error(e.into()),
    };

    let cmd = UpdateTableCommand {
        owner_id: user.id,
        table_id,
        update: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(table) => (StatusCode::OK, Json(TableResponse::from(&table))).into_response(),
        Err(e) => handle_table_error(e),
    }
}

/// DELETE /api/v1/tables/:id
pub async fn delete_table(
    State(handlers): State<TableHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let table_id = match TableId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_table_error(e.into()),
    };

    let cmd = DeleteTableCommand {
        owner_id: user.id,
        table_id,
    };
    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_table_error(e),
    }
}

pub fn handle_table_error(error: TableError) -> Response {
    match &error {
        TableError::NotFound(id) => {
            ErrorResponse::not_found("Table", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        TableError::RestaurantNotFound(id) => {
            ErrorResponse::not_found("Restaurant", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        TableError::BranchNotFound(id) => {
            ErrorResponse::not_found("Branch", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        TableError::NumberTaken(_) => {
            ErrorResponse::conflict(error.message()).with_status(StatusCode::CONFLICT)
        }
        TableError::Forbidden => {
            ErrorResponse::forbidden(error.message()).with_status(StatusCode::FORBIDDEN)
        }
        TableError::ValidationFailed { field, message } => {
            ErrorResponse::validation(field, message.clone()).with_status(StatusCode::BAD_REQUEST)
        }
        TableError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Table workflow failed");
            ErrorResponse::internal("Internal server error")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
