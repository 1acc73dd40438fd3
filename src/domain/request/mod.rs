//! Request module - diner service calls and their lifecycle.

mod errors;
mod request;

pub use errors::RequestError;
pub use request::{RequestStatus, ServiceRequest};
