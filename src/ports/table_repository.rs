//! Table repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RestaurantId, TableId};
use crate::domain::table::Table;

/// Repository port for table persistence.
///
/// Implementations must keep table numbers unique per restaurant.
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Save a table, inserting or replacing it by id.
    ///
    /// Fails with `TableNumberTaken` when another table of the restaurant
    /// already uses its number.
    async fn save(&self, table: &Table) -> Result<(), DomainError>;

    /// Find a table by its ID.
    async fn find_by_id(&self, id: &TableId) -> Result<Option<Table>, DomainError>;

    /// All tables of a restaurant, ordered by number.
    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Table>, DomainError>;

    /// Whether the restaurant already has a table with this number.
    async fn number_exists(
        &self,
        restaurant_id: &RestaurantId,
        number: u32,
    ) -> Result<bool, DomainError>;

    /// Delete a table. Fails with `TableNotFound` if it does not exist.
    async fn delete(&self, id: &TableId) -> Result<(), DomainError>;
}
