//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, authentication types and error types
//! that form the vocabulary of the back-office domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    BranchId, ConnectionId, RequestId, RestaurantId, TableId, UserId, COORDINATE_DELIMITER,
};
pub use timestamp::Timestamp;
