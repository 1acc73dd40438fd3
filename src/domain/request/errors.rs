//! Service-request error types.

use crate::domain::foundation::{
    BranchId, DomainError, ErrorCode, RequestId, RestaurantId, TableId, ValidationError,
};

/// Errors raised by service request workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The presented QR proof does not match the claimed table coordinates.
    InvalidQrCode,
    /// Request was not found.
    NotFound(RequestId),
    /// Restaurant was not found.
    RestaurantNotFound(RestaurantId),
    /// Branch was not found or belongs to another restaurant.
    BranchNotFound(BranchId),
    /// Table was not found or belongs to another restaurant.
    TableNotFound(TableId),
    /// Branch exists but is deactivated.
    BranchInactive(BranchId),
    /// Table exists but is deactivated.
    TableInactive(TableId),
    /// Caller does not own the restaurant.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Persistence did not answer in time.
    Timeout,
    /// Infrastructure error.
    Infrastructure(String),
}

impl RequestError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RequestError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RequestError::InvalidQrCode => ErrorCode::InvalidQrCode,
            RequestError::NotFound(_) => ErrorCode::RequestNotFound,
            RequestError::RestaurantNotFound(_) => ErrorCode::RestaurantNotFound,
            RequestError::BranchNotFound(_) => ErrorCode::BranchNotFound,
            RequestError::TableNotFound(_) => ErrorCode::TableNotFound,
            RequestError::BranchInactive(_) => ErrorCode::BranchInactive,
            RequestError::TableInactive(_) => ErrorCode::TableInactive,
            RequestError::Forbidden => ErrorCode::Forbidden,
            RequestError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RequestError::Timeout => ErrorCode::Timeout,
            RequestError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RequestError::InvalidQrCode => "Invalid QR code".to_string(),
            RequestError::NotFound(id) => format!("Request not found: {}", id),
            RequestError::RestaurantNotFound(id) => format!("Restaurant not found: {}", id),
            RequestError::BranchNotFound(id) => format!("Branch not found: {}", id),
            RequestError::TableNotFound(id) => format!("Table not found: {}", id),
            RequestError::BranchInactive(id) => format!("Branch is not active: {}", id),
            RequestError::TableInactive(id) => format!("Table is not active: {}", id),
            RequestError::Forbidden => "You don't have access to this restaurant".to_string(),
            RequestError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RequestError::Timeout => "Storage did not respond in time".to_string(),
            RequestError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RequestError {}

impl From<ValidationError> for RequestError {
    fn from(err: ValidationError) -> Self {
        RequestError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for RequestError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden | ErrorCode::Unauthorized => RequestError::Forbidden,
            ErrorCode::Timeout => RequestError::Timeout,
            _ => RequestError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_qr_code_has_dedicated_code() {
        assert_eq!(RequestError::InvalidQrCode.code(), ErrorCode::InvalidQrCode);
    }

    #[test]
    fn domain_timeout_maps_to_timeout() {
        let err: RequestError = DomainError::new(ErrorCode::Timeout, "slow").into();
        assert_eq!(err, RequestError::Timeout);
    }

    #[test]
    fn status_parse_error_becomes_validation_failure() {
        let err: RequestError = "closed"
            .parse::<crate::domain::request::RequestStatus>()
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
