//! BulkCreateTablesHandler - Command handler for adding many tables at once.
//!
//! New tables continue the restaurant's numbering: with tables up to 7
//! already present, a batch of three gets 8, 9 and 10.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, ErrorCode, RestaurantId, TableId, UserId};
use crate::domain::table::{Table, TableError};
use crate::ports::{BranchRepository, RestaurantRepository, TableRepository};

/// Most tables a single batch may create.
pub const MAX_BULK_TABLES: u32 = 100;

#[derive(Debug, Clone)]
pub struct BulkCreateTablesCommand {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
    pub branch_id: BranchId,
    pub count: u32,
    pub capacity: u32,
}

pub struct BulkCreateTablesHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
    tables: Arc<dyn TableRepository>,
    qr_base_url: String,
}

impl BulkCreateTablesHandler {
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

    pub async fn handle(&self, cmd: BulkCreateTablesCommand) -> Result<Vec<Table>, TableError> {
        if !(1..=MAX_BULK_TABLES).contains(&cmd.count) {
            return Err(TableError::validation(
                "count",
                format!("must be between 1 and {}", MAX_BULK_TABLES),
            ));
        }

        // 1. Owner check, branch belongs to the restaurant
        super::owned_restaurant(self.restaurants.as_ref(), &cmd.restaurant_id, &cmd.owner_id)
            .await?;
        match self.branches.find_by_id(&cmd.branch_id).await? {
            Some(branch) if branch.belongs_to(&cmd.restaurant_id) => {}
            _ => return Err(TableError::BranchNotFound(cmd.branch_id)),
        }

        // 2. Continue after the highest number in use
        let highest = self
            .tables
            .find_by_restaurant(&cmd.restaurant_id)
            .await?
            .iter()
            .map(Table::number)
            .max()
            .unwrap_or(0);
        let first = highest.checked_add(1).ok_or_else(|| {
            TableError::validation("number", "table numbers are exhausted")
        })?;
        let last = first.checked_add(cmd.count - 1).ok_or_else(|| {
            TableError::validation("number", "table numbers are exhausted")
        })?;

        let batch = (first..=last)
            .map(|number| {
                Table::new(
                    TableId::generate(),
                    cmd.restaurant_id.clone(),
                    cmd.branch_id.clone(),
                    number,
                    cmd.capacity,
                    &self.qr_base_url,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        // 3. Persist; a failure removes the tables of this batch already saved
        for (saved, table) in batch.iter().enumerate() {
            if let Err(e) = self.tables.save(table).await {
                for created in &batch[..saved] {
                    if let Err(cleanup) = self.tables.delete(created.id()).await {
                        tracing::warn!(table_id = %created.id(), error = %cleanup, "Bulk cleanup failed");
                    }
                }
                return Err(match e.code {
                    ErrorCode::TableNumberTaken => TableError::NumberTaken(table.number()),
                    _ => TableError::from(e),
                });
            }
        }

        tracing::info!(
            restaurant_id = %cmd.restaurant_id,
            branch_id = %cmd.branch_id,
            first,
            last,
            "Tables created in bulk"
        );
        Ok(batch)
    }
}
