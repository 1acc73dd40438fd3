//! HTTP handlers for restaurant and branch endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::restaurant::{
    CreateBranchCommand, CreateBranchHandler, CreateRestaurantCommand, CreateRestaurantHandler,
    DeleteBranchCommand, DeleteBranchHandler, DeleteRestaurantCommand, DeleteRestaurantHandler,
    GetBranchHandler, GetBranchQuery, GetRestaurantHandler, GetRestaurantQuery,
    ListBranchesHandler, ListBranchesQuery, ListOwnerRestaurantsHandler,
    ListOwnerRestaurantsQuery, SetupRestaurantCommand, SetupRestaurantHandler,
    UpdateBranchCommand, UpdateBranchHandler, UpdateRestaurantCommand, UpdateRestaurantHandler,
};
use crate::domain::foundation::{BranchId, RestaurantId};
use crate::domain::restaurant::RestaurantError;

use super::dto::{
    BranchResponse, CreateBranchRequest, CreateRestaurantRequest, RestaurantResponse,
    SetupRestaurantRequest, SetupRestaurantResponse, UpdateBranchRequest,
    UpdateRestaurantRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RestaurantHandlers {
    create_handler: Arc<CreateRestaurantHandler>,
    list_handler: Arc<ListOwnerRestaurantsHandler>,
    get_handler: Arc<GetRestaurantHandler>,
    update_handler: Arc<UpdateRestaurantHandler>,
    delete_handler: Arc<DeleteRestaurantHandler>,
    setup_handler: Arc<SetupRestaurantHandler>,
}

impl RestaurantHandlers {
    pub fn new(
        create_handler: Arc<CreateRestaurantHandler>,
        list_handler: Arc<ListOwnerRestaurantsHandler>,
        get_handler: Arc<GetRestaurantHandler>,
        update_handler: Arc<UpdateRestaurantHandler>,
        delete_handler: Arc<DeleteRestaurantHandler>,
        setup_handler: Arc<SetupRestaurantHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
            setup_handler,
        }
    }
}

#[derive(Clone)]
pub struct BranchHandlers {
    create_handler: Arc<CreateBranchHandler>,
    list_handler: Arc<ListBranchesHandler>,
    get_handler: Arc<GetBranchHandler>,
    update_handler: Arc<UpdateBranchHandler>,
    delete_handler: Arc<DeleteBranchHandler>,
}

impl BranchHandlers {
    pub fn new(
        create_handler: Arc<CreateBranchHandler>,
        list_handler: Arc<ListBranchesHandler>,
        get_handler: Arc<GetBranchHandler>,
        update_handler: Arc<UpdateBranchHandler>,
        delete_handler: Arc<DeleteBranchHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Restaurant endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/restaurants
pub async fn create_restaurant(
    State(handlers): State<RestaurantHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateRestaurantRequest>,
) -> Response {
    let cmd = CreateRestaurantCommand {
        owner_id: user.id,
        details: req.into(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(restaurant) => (
            StatusCode::CREATED,
            Json(RestaurantResponse::from(&restaurant)),
        )
            .into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

/// GET /api/v1/restaurants - Restaurants owned by the caller.
pub async fn list_restaurants(
    State(handlers): State<RestaurantHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ListOwnerRestaurantsQuery { owner_id: user.id };

    match handlers.list_handler.handle(query).await {
        Ok(restaurants) => {
            let body: Vec<RestaurantResponse> =
                restaurants.iter().map(RestaurantResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_restaurant_error(e),
    }
}

/// GET /api/v1/restaurants/:id
pub async fn get_restaurant(
    State(handlers): State<RestaurantHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let restaurant_id = match RestaurantId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let query = GetRestaurantQuery {
        restaurant_id,
        owner_id: user.id,
    };
    match handlers.get_handler.handle(query).await {
        Ok(restaurant) => {
            (StatusCode::OK, Json(RestaurantResponse::from(&restaurant))).into_response()
        }
        Err(e) => handle_restaurant_error(e),
    }
}

/// PUT /api/v1/restaurants/:id
pub async fn update_restaurant(
    State(handlers): State<RestaurantHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateRestaurantRequest>,
) -> Response {
    let restaurant_id = match RestaurantId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let cmd = UpdateRestaurantCommand {
        owner_id: user.id,
        restaurant_id,
        update: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(restaurant) => {
            (StatusCode::OK, Json(RestaurantResponse::from(&restaurant))).into_response()
        }
        Err(e) => handle_restaurant_error(e),
    }
}

/// DELETE /api/v1/restaurants/:id - Removes the restaurant with its branches and tables.
pub async fn delete_restaurant(
    State(handlers): State<RestaurantHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let restaurant_id = match RestaurantId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let cmd = DeleteRestaurantCommand {
        owner_id: user.id,
        restaurant_id,
    };
    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

/// POST /api/v1/restaurants/setup - Restaurant, first branch and tables at once.
pub async fn setup_restaurant(
    State(handlers): State<RestaurantHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<SetupRestaurantRequest>,
) -> Response {
    let cmd = SetupRestaurantCommand {
        owner_id: user.id,
        details: req.details(),
        branch_address: req.branch_address,
        table_count: req.table_count,
        table_capacity: req.table_capacity,
    };

    match handlers.setup_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(SetupRestaurantResponse::from(&result)),
        )
            .into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Branch endpoints
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/branches
pub async fn create_branch(
    State(handlers): State<BranchHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateBranchRequest>,
) -> Response {
    let restaurant_id = match RestaurantId::new(req.restaurant_id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let cmd = CreateBranchCommand {
        owner_id: user.id,
        restaurant_id,
        address: req.address,
        description: req.description,
    };
    match handlers.create_handler.handle(cmd).await {
        Ok(branch) => (StatusCode::CREATED, Json(BranchResponse::from(&branch))).into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

/// GET /api/v1/branches/restaurant/:restaurant_id
pub async fn list_branches(
    State(handlers): State<BranchHandlers>,
    RequireAuth(user): RequireAuth,
    Path(restaurant_id): Path<String>,
) -> Response {
    let restaurant_id = match RestaurantId::new(restaurant_id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let query = ListBranchesQuery {
        owner_id: user.id,
        restaurant_id,
    };
    match handlers.list_handler.handle(query).await {
        Ok(branches) => {
            let body: Vec<BranchResponse> = branches.iter().map(BranchResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_restaurant_error(e),
    }
}

/// GET /api/v1/branches/:id
pub async fn get_branch(
    State(handlers): State<BranchHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let branch_id = match BranchId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let query = GetBranchQuery {
        owner_id: user.id,
        branch_id,
    };
    match handlers.get_handler.handle(query).await {
        Ok(branch) => (StatusCode::OK, Json(BranchResponse::from(&branch))).into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

/// PUT /api/v1/branches/:id
pub async fn update_branch(
    State(handlers): State<BranchHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<UpdateBranchRequest>,
) -> Response {
    let branch_id = match BranchId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let cmd = UpdateBranchCommand {
        owner_id: user.id,
        branch_id,
        update: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(branch) => (StatusCode::OK, Json(BranchResponse::from(&branch))).into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

/// DELETE /api/v1/branches/:id
pub async fn delete_branch(
    State(handlers): State<BranchHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let branch_id = match BranchId::new(id) {
        Ok(id) => id,
        Err(e) => return handle_restaurant_error(e.into()),
    };

    let cmd = DeleteBranchCommand {
        owner_id: user.id,
        branch_id,
    };
    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_restaurant_error(e),
    }
}

pub fn handle_restaurant_error(error: RestaurantError) -> Response {
    match &error {
        RestaurantError::NotFound(id) => {
            ErrorResponse::not_found("Restaurant", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        RestaurantError::BranchNotFound(id) => {
            ErrorResponse::not_found("Branch", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        RestaurantError::Forbidden => {
            ErrorResponse::forbidden(error.message()).with_status(StatusCode::FORBIDDEN)
        }
        RestaurantError::ValidationFailed { field, message } => {
            ErrorResponse::validation(field, message.clone()).with_status(StatusCode::BAD_REQUEST)
        }
        RestaurantError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Restaurant workflow failed");
            ErrorResponse::internal("Internal server error")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
