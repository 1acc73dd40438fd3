//! Te Pido La Cuenta - restaurant back office.
//!
//! Diners scan a QR code printed on their table to call staff. The code
//! carries the table's coordinates plus a short proof; the public endpoint
//! verifies it, records a service request and pushes a notification to
//! every live dashboard of that restaurant over WebSocket.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
