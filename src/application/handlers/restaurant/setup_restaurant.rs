//! SetupRestaurantHandler - onboarding in one call.
//!
//! Creates a restaurant, its first branch and tables numbered `1..=N`,
//! each with its QR URL. Every entity is validated before the first write.
//! If a later write fails, the earlier ones are deleted again.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, RestaurantId, TableId, UserId};
use crate::domain::restaurant::{Branch, Restaurant, RestaurantDetails, RestaurantError};
use crate::domain::table::Table;
use crate::ports::{BranchRepository, RestaurantRepository, TableRepository};

/// Most tables a single setup call may create.
pub const MAX_SETUP_TABLES: u32 = 100;

#[derive(Debug, Clone)]
pub struct SetupRestaurantCommand {
    pub owner_id: UserId,
    pub details: RestaurantDetails,
    /// Address of the first branch. Defaults to the restaurant's address.
    pub branch_address: Option<String>,
    pub table_count: u32,
    pub table_capacity: u32,
}

#[derive(Debug, Clone)]
pub struct SetupRestaurantResult {
    pub restaurant: Restaurant,
    pub branch: Branch,
    pub tables: Vec<Table>,
}

pub struct SetupRestaurantHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
    tables: Arc<dyn TableRepository>,
    qr_base_url: String,
}

impl SetupRestaurantHandler {
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

    pub async fn handle(
        &self,
        cmd: SetupRestaurantCommand,
    ) -> Result<SetupRestaurantResult, RestaurantError> {
        // 1. Build and validate everything up front
        if !(1..=MAX_SETUP_TABLES).contains(&cmd.table_count) {
            return Err(RestaurantError::validation(
                "tableCount",
                format!("must be between 1 and {}", MAX_SETUP_TABLES),
            ));
        }
        let restaurant = Restaurant::new(RestaurantId::generate(), cmd.owner_id, cmd.details)?;
        let branch_address = cmd
            .branch_address
            .unwrap_or_else(|| restaurant.address().to_string());
        let branch = Branch::new(
            BranchId::generate(),
            restaurant.id().clone(),
            branch_address,
            None,
        )?;
        let tables = (1..=cmd.table_count)
            .map(|number| {
                Table::new(
                    TableId::generate(),
                    restaurant.id().clone(),
                    branch.id().clone(),
                    number,
                    cmd.table_capacity,
                    &self.qr_base_url,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        // 2. Persist in dependency order
        self.restaurants.save(&restaurant).await?;
        if let Err(e) = self.branches.save(&branch).await {
            self.undo(&restaurant, None, &[]).await;
            return Err(e.into());
        }
        for (saved, table) in tables.iter().enumerate() {
            if let Err(e) = self.tables.save(table).await {
                self.undo(&restaurant, Some(&branch), &tables[..saved]).await;
                return Err(e.into());
            }
        }

        tracing::info!(
            restaurant_id = %restaurant.id(),
            branch_id = %branch.id(),
            tables = tables.len(),
            "Restaurant set up"
        );
        Ok(SetupRestaurantResult {
            restaurant,
            branch,
            tables,
        })
    }

    /// Best-effort removal of a partial setup, children before parents.
    async fn undo(&self, restaurant: &Restaurant, branch: Option<&Branch>, tables: &[Table]) {
        for table in tables {
            if let Err(e) = self.tables.delete(table.id()).await {
                tracing::warn!(table_id = %table.id(), error = %e, "Setup cleanup failed");
            }
        }
        if let Some(branch) = branch {
            if let Err(e) = self.branches.delete(branch.id()).await {
                tracing::warn!(branch_id = %branch.id(), error = %e, "Setup cleanup failed");
            }
        }
        if let Err(e) = self.restaurants.delete(restaurant.id()).await {
            tracing::warn!(restaurant_id = %restaurant.id(), error = %e, "Setup cleanup failed");
        }
    }
}
