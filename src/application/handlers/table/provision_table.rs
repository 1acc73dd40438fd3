//! ProvisionTableHandler - Command handler for adding a table and issuing
//! its QR code.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, ErrorCode, RestaurantId, TableId, UserId};
use crate::domain::table::{Table, TableError};
use crate::ports::{BranchRepository, RestaurantRepository, TableRepository};

/// Command to provision a table in a branch of an owned restaurant.
#[derive(Debug, Clone)]
pub struct ProvisionTableCommand {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
    pub branch_id: BranchId,
    pub number: u32,
    pub capacity: u32,
}

/// Handler for provisioning tables.
///
/// The new table carries the diner-facing QR URL built from
/// `qr_base_url` and a proof over its coordinates.
pub struct ProvisionTableHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
    tables: Arc<dyn TableRepository>,
    qr_base_url: String,
}

impl ProvisionTableHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
        tables: Arc<dyn TableRepository>,
        qr_base_url: impl Into<String>,
    ) -> Self {
        Self {
            restaurants,
            branches,
            tables,
            qr_base_url: qr_base_url.into(),
        }
    }

    pub async fn handle(&self, cmd: ProvisionTableCommand) -> Result<Table, TableError> {
        // 1. Owner check
        super::owned_restaurant(self.restaurants.as_ref(), &cmd.restaurant_id, &cmd.owner_id)
            .await?;

        // 2. Branch must belong to the restaurant
        match self.branches.find_by_id(&cmd.branch_id).await? {
            Some(branch) if branch.belongs_to(&cmd.restaurant_id) => {}
            _ => return Err(TableError::BranchNotFound(cmd.branch_id)),
        }

        // 3. Number unique per restaurant
        if self
            .tables
            .number_exists(&cmd.restaurant_id, cmd.number)
            .await?
        {
            return Err(TableError::NumberTaken(cmd.number));
        }

        // 4. Build with QR URL and persist
        let table = Table::new(
            TableId::generate(),
            cmd.restaurant_id,
            cmd.branch_id,
            cmd.number,
            cmd.capacity,
            &self.qr_base_url,
        )?;
        self.tables.save(&table).await.map_err(|e| match e.code {
            ErrorCode::TableNumberTaken => TableError::NumberTaken(cmd.number),
            _ => TableError::from(e),
        })?;

        tracing::info!(
            restaurant_id = %table.restaurant_id(),
            table_id = %table.id(),
            number = table.number(),
            "Table provisioned"
        );
        Ok(table)
    }
}
