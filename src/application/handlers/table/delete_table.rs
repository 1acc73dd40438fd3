//! DeleteTableHandler - owner removes a table.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, TableId, UserId};
use crate::domain::table::TableError;
use crate::ports::{RestaurantRepository, TableRepository};

#[derive(Debug, Clone)]
pub struct DeleteTableCommand {
    pub owner_id: UserId,
    pub table_id: TableId,
}

pub struct DeleteTableHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    tables: Arc<dyn TableRepository>,
}

impl DeleteTableHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        tables: Arc<dyn TableRepository>,
    ) -> Self {
        Self {
            restaurants,
            tables,
        }
    }

    pub async fn handle(&self, cmd: DeleteTableCommand) -> Result<(), TableError> {
        super::owned_table(
            self.restaurants.as_ref(),
            self.tables.as_ref(),
            &cmd.table_id,
            &cmd.owner_id,
        )
        .await?;

        self.tables
            .delete(&cmd.table_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::TableNotFound => TableError::NotFound(cmd.table_id.clone()),
                _ => TableError::from(e),
            })?;
        tracing::info!(table_id = %cmd.table_id, "Table deleted");
        Ok(())
    }
}
