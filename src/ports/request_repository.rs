//! Service request repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RequestId, RestaurantId};
use crate::domain::request::ServiceRequest;

/// Repository port for service request persistence.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Save a new request.
    async fn save(&self, request: &ServiceRequest) -> Result<(), DomainError>;

    /// Update an existing request.
    ///
    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, request: &ServiceRequest) -> Result<(), DomainError>;

    /// Find a request by its ID.
    async fn find_by_id(&self, id: &RequestId) -> Result<Option<ServiceRequest>, DomainError>;

    /// All requests of a restaurant, newest first.
    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<ServiceRequest>, DomainError>;

    /// Pending requests of a restaurant, newest first.
    async fn find_pending_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<ServiceRequest>, DomainError>;

    /// Delete a request.
    ///
    /// # Errors
    ///
    /// - `RequestNotFound` if the request doesn't exist
    async fn delete(&self, id: &RequestId) -> Result<(), DomainError>;
}
