//! Table-specific error types.

use crate::domain::foundation::{
    BranchId, DomainError, ErrorCode, RestaurantId, TableId, ValidationError,
};

/// Errors raised while provisioning and managing tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Table was not found.
    NotFound(TableId),
    /// Restaurant was not found.
    RestaurantNotFound(RestaurantId),
    /// Branch was not found or belongs to another restaurant.
    BranchNotFound(BranchId),
    /// Another table of the restaurant already uses this number.
    NumberTaken(u32),
    /// Caller does not own the restaurant.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl TableError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TableError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TableError::NotFound(_) => ErrorCode::TableNotFound,
            TableError::RestaurantNotFound(_) => ErrorCode::RestaurantNotFound,
            TableError::BranchNotFound(_) => ErrorCode::BranchNotFound,
            TableError::NumberTaken(_) => ErrorCode::TableNumberTaken,
            TableError::Forbidden => ErrorCode::Forbidden,
            TableError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TableError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            TableError::NotFound(id) => format!("Table not found: {}", id),
            TableError::RestaurantNotFound(id) => format!("Restaurant not found: {}", id),
            TableError::BranchNotFound(id) => format!("Branch not found: {}", id),
            TableError::NumberTaken(number) => {
                format!("Table number {} already exists in this restaurant", number)
            }
            TableError::Forbidden => "You don't have access to this restaurant".to_string(),
            TableError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TableError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TableError {}

impl From<ValidationError> for TableError {
    fn from(err: ValidationError) -> Self {
        TableError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for TableError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => TableError::Forbidden,
            _ => TableError::Infrastructure(err.to_string()),
        }
    }
}
