//! Restaurant repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RestaurantId, UserId};
use crate::domain::restaurant::Restaurant;

/// Repository port for Restaurant aggregate persistence.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Save a restaurant, inserting or replacing it by id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, restaurant: &Restaurant) -> Result<(), DomainError>;

    /// Find a restaurant by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError>;

    /// Find all restaurants owned by a user, newest first.
    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Restaurant>, DomainError>;

    /// Delete a restaurant.
    ///
    /// Stores with referential integrity remove its branches, tables and
    /// requests with it.
    ///
    /// # Errors
    ///
    /// - `RestaurantNotFound` if no such restaurant exists
    async fn delete(&self, id: &RestaurantId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restaurant_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn RestaurantRepository) {}
    }
}
