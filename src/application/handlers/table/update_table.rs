//! UpdateTableHandler - Command handler for renumbering, resizing or
//! retiring a table.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, TableId, UserId};
use crate::domain::table::{Table, TableError, TableUpdate};
use crate::ports::{RestaurantRepository, TableRepository};

#[derive(Debug, Clone)]
pub struct UpdateTableCommand {
    pub owner_id: UserId,
    pub table_id: TableId,
    pub update: TableUpdate,
}

/// Handler for editing tables.
///
/// A new number must be free in the restaurant. It re-stamps the QR URL,
/// so the owner has to reprint the code.
pub struct UpdateTableHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    tables: Arc<dyn TableRepository>,
    qr_base_url: String,
}

impl UpdateTableHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        tables: Arc<dyn TableRepository>,
        qr_base_url: impl Into<String>,
    ) -> Self {
        Self {
            restaurants,
            tables,
            qr_base_url: qr_base_url.into(),
        }
    }

    pub async fn handle(&self, cmd: UpdateTableCommand) -> Result<Table, TableError> {
        // 1. Owner check
        let mut table = super::owned_table(
            self.restaurants.as_ref(),
            self.tables.as_ref(),
            &cmd.table_id,
            &cmd.owner_id,
        )
        .await?;

        // 2. New number unique per restaurant
        if let Some(number) = cmd.update.number.filter(|n| *n != table.number()) {
            if self
                .tables
                .number_exists(table.restaurant_id(), number)
                .await?
            {
                return Err(TableError::NumberTaken(number));
            }
        }

        // 3. Apply and persist
        table.apply_update(cmd.update, &self.qr_base_url)?;
        let number = table.number();
        self.tables.save(&table).await.map_err(|e| match e.code {
            ErrorCode::TableNumberTaken => TableError::NumberTaken(number),
            _ => TableError::from(e),
        })?;

        tracing::info!(
            table_id = %table.id(),
            number = table.number(),
            is_active = table.is_active(),
            "Table updated"
        );
        Ok(table)
    }
}
