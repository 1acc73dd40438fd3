//! CreateBranchHandler - Command handler for opening a branch.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, RestaurantId, UserId};
use crate::domain::restaurant::{Branch, RestaurantError};
use crate::ports::{BranchRepository, RestaurantRepository};

/// Command to add a branch to an owned restaurant.
#[derive(Debug, Clone)]
pub struct CreateBranchCommand {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
    pub address: String,
    pub description: Option<String>,
}

/// Handler for creating branches.
pub struct CreateBranchHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl CreateBranchHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            restaurants,
            branches,
        }
    }

    pub async fn handle(&self, cmd: CreateBranchCommand) -> Result<Branch, RestaurantError> {
        // 1. Only the owner may add branches
        super::owned_restaurant(self.restaurants.as_ref(), &cmd.restaurant_id, &cmd.owner_id)
            .await?;

        // 2. Create and persist
        let branch = Branch::new(
            BranchId::generate(),
            cmd.restaurant_id,
            cmd.address,
            cmd.description,
        )?;
        self.branches.save(&branch).await?;

        tracing::info!(
            restaurant_id = %branch.restaurant_id(),
            branch_id = %branch.id(),
            "Branch created"
        );
        Ok(branch)
    }
}
