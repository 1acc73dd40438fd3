//! Restaurant-specific error types.

use crate::domain::foundation::{
    BranchId, DomainError, ErrorCode, RestaurantId, ValidationError,
};

/// Errors raised by restaurant and branch workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantError {
    /// Restaurant was not found.
    NotFound(RestaurantId),
    /// Branch was not found (or belongs to another restaurant).
    BranchNotFound(BranchId),
    /// Caller does not own the restaurant.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl RestaurantError {
    pub fn not_found(id: RestaurantId) -> Self {
        RestaurantError::NotFound(id)
    }
    pub fn branch_not_found(id: BranchId) -> Self {
        RestaurantError::BranchNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RestaurantError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            RestaurantError::NotFound(_) => ErrorCode::RestaurantNotFound,
            RestaurantError::BranchNotFound(_) => ErrorCode::BranchNotFound,
            RestaurantError::Forbidden => ErrorCode::Forbidden,
            RestaurantError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RestaurantError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            RestaurantError::NotFound(id) => format!("Restaurant not found: {}", id),
            RestaurantError::BranchNotFound(id) => format!("Branch not found: {}", id),
            RestaurantError::Forbidden => "You don't have access to this restaurant".to_string(),
            RestaurantError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RestaurantError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RestaurantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RestaurantError {}

impl From<ValidationError> for RestaurantError {
    fn from(err: ValidationError) -> Self {
        RestaurantError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for RestaurantError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => RestaurantError::Forbidden,
            ErrorCode::ValidationFailed => RestaurantError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => RestaurantError::Infrastructure(err.to_string()),
        }
    }
}
