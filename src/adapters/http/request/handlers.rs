//! HTTP handlers for service request endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::request::{
    CreateServiceRequestCommand, CreateServiceRequestHandler, DeleteRequestCommand,
    DeleteRequestHandler, GetRequestHandler, GetRequestQuery, ListRequestsHandler,
    ListRequestsQuery, UpdateRequestStatusCommand, UpdateRequestStatusHandler,
};
use crate::domain::foundation::{RequestId, RestaurantId};
use crate::domain::request::{RequestError, RequestStatus};

use super::dto::{CreateServiceRequestBody, RequestListResponse, RequestResponse, UpdateStatusBody};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RequestHandlers {
    create_handler: Arc<CreateServiceRequestHandler>,
    list_handler: Arc<ListRequestsHandler>,
    get_handler: Arc<GetRequestHandler>,
    update_status_handler: Arc<UpdateRequestStatusHandler>,
    delete_handler: Arc<DeleteRequestHandler>,
}

impl RequestHandlers {
    pub fn new(
        create_handler: Arc<CreateServiceRequestHandler>,
        list_handler: Arc<ListRequestsHandler>,
        get_handler: Arc<GetRequestHandler>,
        update_status_handler: Arc<UpdateRequestStatusHandler>,
        delete_handler: Arc<DeleteRequestHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_status_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/public/request-account - Diner asks for the bill.
///
/// Unauthenticated; the QR proof in `hash` stands in for credentials.
pub async fn create_service_request(
    State(handlers): State<RequestHandlers>,
    Json(body): Json<CreateServiceRequestBody>,
) -> Response {
    let cmd = CreateServiceRequestCommand {
        restaurant_id: body.restaurant_id,
        branch_id: body.branch_id,
        table_id: body.table_id,
        table_number: body.table_number,
        proof: body.hash,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(RequestResponse::from(&result.request)),
        )
            .into_response(),
        Err(e) => handle_request_error(e),
    }
}

/// GET /api/v1/requests/restaurant/:restaurant_id - All requests, newest first.
pub async fn list_requests(
    State(handlers): State<RequestHandlers>,
    RequireAuth(user): RequireAuth,
    Path(restaurant_id): Path<String>,
) -> Response {
    list(handlers, user.id, restaurant_id, false).await
}

/// GET /api/v1/requests/restaurant/:restaurant_id/pending - Requests awaiting staff.
pub async fn list_pending_requests(
    State(handlers): State<RequestHandlers>,
    RequireAuth(user): RequireAuth,
    Path(restaurant_id): Path<String>,
) -> Response {
    list(handlers, user.id, restaurant_id, true).await
}

async fn list(
    handlers: RequestHandlers,
    owner_id: crate::domain::foundation::UserId,
    restaurant_id: String,
    pending_only: bool,
) -> Response {
    let restaurant_id = match RestaurantId::new(restaurant_id) {
        Ok(id) => id,
        Err(e) => return handle_request_error(e.into()),
    };

    let query = ListRequestsQuery {
        owner_id,
        restaurant_id,
        pending_only,
    };
    match handlers.list_handler.handle(query).await {
        Ok(requests) => (StatusCode::OK, Json(RequestListResponse::from(requests))).into_response(),
        Err(e) => handle_request_error(e),
    }
}

/// GET /api/v1/requests/:id
pub async fn get_request(
    State(handlers): State<RequestHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let request_id = match parse_request_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetRequestQuery {
        owner_id: user.id,
        request_id,
    };
    match handlers.get_handler.handle(query).await {
        Ok(request) => (StatusCode::OK, Json(RequestResponse::from(&request))).into_response(),
        Err(e) => handle_request_error(e),
    }
}

/// PUT /api/v1/requests/:id/status
pub async fn update_request_status(
    State(handlers): State<RequestHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusBody>,
) -> Response {
    let request_id = match parse_request_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let status: RequestStatus = match body.status.parse() {
        Ok(status) => status,
        Err(e) => return handle_request_error(RequestError::from(e)),
    };

    let cmd = UpdateRequestStatusCommand {
        owner_id: user.id,
        request_id,
        status,
    };
    match handlers.update_status_handler.handle(cmd).await {
        Ok(request) => (StatusCode::OK, Json(RequestResponse::from(&request))).into_response(),
        Err(e) => handle_request_error(e),
    }
}

/// DELETE /api/v1/requests/:id
pub async fn delete_request(
    State(handlers): State<RequestHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let request_id = match parse_request_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteRequestCommand {
        owner_id: user.id,
        request_id,
    };
    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_request_error(e),
    }
}

fn parse_request_id(raw: &str) -> Result<RequestId, Response> {
    raw.parse().map_err(|_| {
        ErrorResponse::bad_request(format!("Invalid request id: {}", raw))
            .with_status(StatusCode::BAD_REQUEST)
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Maps a request workflow error onto an HTTP response.
pub fn handle_request_error(error: RequestError) -> Response {
    match &error {
        RequestError::InvalidQrCode => ErrorResponse::invalid_qr_code(error.message())
            .with_status(StatusCode::BAD_REQUEST),
        RequestError::NotFound(id) => ErrorResponse::not_found("Request", &id.to_string())
            .with_status(StatusCode::NOT_FOUND),
        RequestError::RestaurantNotFound(id) => {
            ErrorResponse::not_found("Restaurant", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        RequestError::BranchNotFound(id) => {
            ErrorResponse::not_found("Branch", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        RequestError::TableNotFound(id) => {
            ErrorResponse::not_found("Table", id.as_str()).with_status(StatusCode::NOT_FOUND)
        }
        RequestError::BranchInactive(_) | RequestError::TableInactive(_) => {
            ErrorResponse::bad_request(error.message()).with_status(StatusCode::BAD_REQUEST)
        }
        RequestError::Forbidden => ErrorResponse::forbidden(error.message())
            .with_status(StatusCode::FORBIDDEN),
        RequestError::ValidationFailed { field, message } => {
            ErrorResponse::validation(field, message.clone()).with_status(StatusCode::BAD_REQUEST)
        }
        RequestError::Timeout => ErrorResponse::timeout(error.message())
            .with_status(StatusCode::GATEWAY_TIMEOUT),
        RequestError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Request workflow failed");
            ErrorResponse::internal("Internal server error")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
