//! WebSocket adapters for live restaurant dashboards.
//!
//! # Architecture
//!
//! ```text
//! CreateServiceRequestHandler
//!            │ publish(BroadcastMessage)
//!            ▼
//! ┌───────────────────────────────────────────────┐
//! │                NotificationHub                │
//! │  rest-1: conn-a, conn-b    rest-2: conn-c     │
//! └───────────────────────────────────────────────┘
//!            │ bounded buffer per connection
//!            ▼
//!      writer task ──▶ socket
//! ```
//!
//! # Components
//!
//! - [`messages`] - Server → client wire types
//! - [`hub`] - Connection registry and broadcast router
//! - [`handler`] - Axum upgrade handler and per-connection loops

pub mod handler;
pub mod hub;
pub mod messages;

pub use handler::{websocket_router, ws_handler, WebSocketState};
pub use hub::{
    Connection, ConnectionHandle, Frame, NotificationHub, DEFAULT_OUTBOUND_CAPACITY,
};
pub use messages::{ConnectedMessage, RequestCreatedMessage, RequestPayload, ServerMessage};
