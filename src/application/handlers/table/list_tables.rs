//! ListTablesHandler - Query handler for a restaurant's tables.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::table::{Table, TableError};
use crate::ports::{RestaurantRepository, TableRepository};

#[derive(Debug, Clone)]
pub struct ListTablesQuery {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
}

/// Handler for listing the tables (and their QR URLs) of a restaurant.
pub struct ListTablesHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    tables: Arc<dyn TableRepository>,
}

impl ListTablesHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        tables: Arc<dyn TableRepository>,
    ) -> Self {
        Self {
            restaurants,
            tables,
        }
    }

    pub async fn handle(&self, query: ListTablesQuery) -> Result<Vec<Table>, TableError> {
        super::owned_restaurant(
            self.restaurants.as_ref(),
            &query.restaurant_id,
            &query.owner_id,
        )
        .await?;

        Ok(self.tables.find_by_restaurant(&query.restaurant_id).await?)
    }
}
