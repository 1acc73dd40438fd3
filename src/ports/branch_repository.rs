//! Branch repository port.

use async_trait::async_trait;

use crate::domain::foundation::{BranchId, DomainError, RestaurantId};
use crate::domain::restaurant::Branch;

/// Repository port for branch persistence.
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Save a branch, inserting or replacing it by id.
    async fn save(&self, branch: &Branch) -> Result<(), DomainError>;

    /// Find a branch by its ID.
    async fn find_by_id(&self, id: &BranchId) -> Result<Option<Branch>, DomainError>;

    /// All branches of a restaurant, oldest first.
    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Branch>, DomainError>;

    /// Delete a branch. Fails with `BranchNotFound` if it does not exist.
    async fn delete(&self, id: &BranchId) -> Result<(), DomainError>;
}
