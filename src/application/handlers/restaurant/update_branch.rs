//! UpdateBranchHandler - Command handler for editing or closing a branch.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, UserId};
use crate::domain::restaurant::{Branch, BranchUpdate, RestaurantError};
use crate::ports::{BranchRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct UpdateBranchCommand {
    pub owner_id: UserId,
    pub branch_id: BranchId,
    pub update: BranchUpdate,
}

/// Handler for editing branches. Deactivating a branch makes its tables
/// refuse new service requests.
pub struct UpdateBranchHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl UpdateBranchHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            restaurants,
            branches,
        }
    }

    pub async fn handle(&self, cmd: UpdateBranchCommand) -> Result<Branch, RestaurantError> {
        let mut branch = super::owned_branch(
            self.restaurants.as_ref(),
            self.branches.as_ref(),
            &cmd.branch_id,
            &cmd.owner_id,
        )
        .await?;

        branch.apply_update(cmd.update)?;
        self.branches.save(&branch).await?;

        tracing::info!(
            branch_id = %branch.id(),
            is_active = branch.is_active(),
            "Branch updated"
        );
        Ok(branch)
    }
}
