//! HTTP adapter for service requests.
//!
//! Diners raise requests through the public endpoint; owners list and
//! manage them through the authenticated ones.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateServiceRequestBody, RequestListResponse, RequestResponse, UpdateStatusBody};
pub use handlers::{handle_request_error, RequestHandlers};
pub use routes::{public_request_routes, request_routes};
