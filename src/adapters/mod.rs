//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - Bearer token validation (HS256 JWT, mock)
//! - `http` - axum REST API
//! - `websocket` - Live dashboard push and the notification hub
//! - `memory` - In-memory repositories for tests and local runs
//! - `postgres` - sqlx repositories

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod websocket;

pub use websocket::NotificationHub;
