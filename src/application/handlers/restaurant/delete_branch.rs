//! DeleteBranchHandler - owner removes a branch.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, ErrorCode, UserId};
use crate::domain::restaurant::RestaurantError;
use crate::ports::{BranchRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct DeleteBranchCommand {
    pub owner_id: UserId,
    pub branch_id: BranchId,
}

pub struct DeleteBranchHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl DeleteBranchHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            restaurants,
            branches,
        }
    }

    pub async fn handle(&self, cmd: DeleteBranchCommand) -> Result<(), RestaurantError> {
        super::owned_branch(
            self.restaurants.as_ref(),
            self.branches.as_ref(),
            &cmd.branch_id,
            &cmd.owner_id,
        )
        .await?;

        self.branches
            .delete(&cmd.branch_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::BranchNotFound => RestaurantError::BranchNotFound(cmd.branch_id.clone()),
                _ => RestaurantError::from(e),
            })?;
        tracing::info!(branch_id = %cmd.branch_id, "Branch deleted");
        Ok(())
    }
}
