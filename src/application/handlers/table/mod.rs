//! Table workflow handlers.

mod bulk_create_tables;
mod delete_table;
mod get_table;
mod list_tables;
mod provision_table;
mod update_table;

pub use bulk_create_tables::{BulkCreateTablesCommand, BulkCreateTablesHandler, MAX_BULK_TABLES};
pub use delete_table::{DeleteTableCommand, DeleteTableHandler};
pub use get_table::{GetTableHandler, GetTableQuery};
pub use list_tables::{ListTablesHandler, ListTablesQuery};
pub use provision_table::{ProvisionTableCommand, ProvisionTableHandler};
pub use update_table::{UpdateTableCommand, UpdateTableHandler};

use crate::domain::foundation::{RestaurantId, TableId, UserId};
use crate::domain::restaurant::Restaurant;
use crate::domain::table::{Table, TableError};
use crate::ports::{RestaurantRepository, TableRepository};

/// Loads a restaurant and checks that `owner_id` owns it.
async fn owned_restaurant(
    restaurants: &dyn RestaurantRepository,
    restaurant_id: &RestaurantId,
    owner_id: &UserId,
) -> Result<Restaurant, TableError> {
    let restaurant = restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| TableError::RestaurantNotFound(restaurant_id.clone()))?;
    if !restaurant.is_owned_by(owner_id) {
        return Err(TableError::Forbidden);
    }
    Ok(restaurant)
}

/// Loads a table and checks that `owner_id` owns its restaurant.
async fn owned_table(
    restaurants: &dyn RestaurantRepository,
    tables: &dyn TableRepository,
    table_id: &TableId,
    owner_id: &UserId,
) -> Result<Table, TableError> {
    let table = tables
        .find_by_id(table_id)
        .await?
        .ok_or_else(|| TableError::NotFound(table_id.clone()))?;
    owned_restaurant(restaurants, table.restaurant_id(), owner_id).await?;
    Ok(table)
}
