//! WebSocket upgrade handler for live restaurant dashboards.
//!
//! Connection lifecycle:
//! 1. Authenticate (bearer header or `?token=`) and check ownership
//! 2. Upgrade to WebSocket
//! 3. Open a hub connection, enqueue the `connected` greeting, join
//! 4. Writer drains the outbound buffer; reader discards inbound frames
//! 5. Whichever loop ends first stops the other; leave the hub

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::request::handle_request_error;
use crate::application::handlers::request::{AuthorizeDashboardHandler, AuthorizeDashboardQuery};
use crate::domain::foundation::RestaurantId;

use super::hub::{ConnectionHandle, Frame, NotificationHub};
use super::messages::ServerMessage;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    pub hub: Arc<NotificationHub>,
    pub authorize: Arc<AuthorizeDashboardHandler>,
}

impl WebSocketState {
    pub fn new(hub: Arc<NotificationHub>, authorize: Arc<AuthorizeDashboardHandler>) -> Self {
        Self { hub, authorize }
    }
}

/// Handle WebSocket upgrade requests for a restaurant dashboard.
///
/// Route: `GET /api/v1/requests/ws/:restaurant_id`
///
/// Refusals happen before the upgrade: 401 without a valid token, 404 for
/// an unknown restaurant, 403 when the caller is not the owner, 426 when
/// an authorized caller did not ask for an upgrade.
pub async fn ws_handler(
    RequireAuth(user): RequireAuth,
    Path(restaurant_id): Path<String>,
    State(state): State<WebSocketState>,
    ws: Option<WebSocketUpgrade>,
) -> Response {
    let restaurant_id = match RestaurantId::new(restaurant_id) {
        Ok(id) => id,
        Err(e) => return handle_request_error(e.into()),
    };

    let query = AuthorizeDashboardQuery {
        user_id: user.id.clone(),
        restaurant_id: restaurant_id.clone(),
    };
    if let Err(e) = state.authorize.handle(query).await {
        tracing::debug!(
            restaurant_id = %restaurant_id,
            user_id = %user.id,
            "Dashboard subscription refused: {}",
            e
        );
        return handle_request_error(e);
    }

    let Some(ws) = ws else {
        return ErrorResponse::bad_request("Expected a WebSocket upgrade request")
            .with_status(StatusCode::UPGRADE_REQUIRED);
    };

    ws.on_upgrade(move |socket| handle_socket(socket, restaurant_id, state.hub))
        .into_response()
}

/// Runs for the lifetime of an established connection.
async fn handle_socket(socket: WebSocket, restaurant_id: RestaurantId, hub: Arc<NotificationHub>) {
    let (sender, mut receiver) = socket.split();

    let (connection, outbound) = hub.open(restaurant_id);
    match ServerMessage::connected(connection.restaurant_id(), connection.id()).to_json() {
        Ok(json) => {
            connection.try_enqueue(Frame::from(json));
        }
        Err(e) => tracing::error!("Failed to serialize connected message: {}", e),
    }
    let handle = hub.join(connection);

    tracing::info!(
        restaurant_id = %handle.restaurant_id,
        connection_id = %handle.id,
        "Dashboard connected"
    );

    let mut send_task = tokio::spawn(write_loop(sender, outbound, handle.clone()));

    let reader_handle = handle.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => {
                    tracing::debug!(connection_id = %reader_handle.id, "Client sent close frame");
                    break;
                }
                Ok(_) => {
                    // Inbound application messages carry no meaning.
                }
                Err(e) => {
                    tracing::debug!(connection_id = %reader_handle.id, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    hub.leave(&handle);
    tracing::info!(
        restaurant_id = %handle.restaurant_id,
        connection_id = %handle.id,
        "Dashboard disconnected"
    );
}

/// Drains the outbound buffer onto the socket.
///
/// When the hub drops its sender (leave or eviction) the buffer closes and
/// the loop sends a close frame.
async fn write_loop(
    mut sender: SplitSink<WebSocket, Message>,
    mut outbound: mpsc::Receiver<Frame>,
    handle: ConnectionHandle,
) {
    while let Some(frame) = outbound.recv().await {
        if let Err(e) = sender.send(Message::Text(frame.to_string())).await {
            tracing::debug!(connection_id = %handle.id, "Send error, closing connection: {}", e);
            return;
        }
    }

    tracing::debug!(connection_id = %handle.id, "Outbound buffer closed");
    let _ = sender.send(Message::Close(None)).await;
}

/// Router for the dashboard endpoint, nested under `/api/v1/requests`.
pub fn websocket_router(state: WebSocketState) -> Router {
    Router::new()
        .route("/ws/:restaurant_id", get(ws_handler))
        .with_state(state)
}
