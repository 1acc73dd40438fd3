//! GetBranchHandler - Query handler for a single owned branch.

use std::sync::Arc;

use crate::domain::foundation::{BranchId, UserId};
use crate::domain::restaurant::{Branch, RestaurantError};
use crate::ports::{BranchRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct GetBranchQuery {
    pub owner_id: UserId,
    pub branch_id: BranchId,
}

pub struct GetBranchHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl GetBranchHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            restaurants,
            branches,
        }
    }

    pub async fn handle(&self, query: GetBranchQuery) -> Result<Branch, RestaurantError> {
        super::owned_branch(
            self.restaurants.as_ref(),
            self.branches.as_ref(),
            &query.branch_id,
            &query.owner_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{fixture, owner, stranger};
    use super::*;

    #[tokio::test]
    async fn owner_reads_branch() {
        let f = fixture().await;
        let handler = GetBranchHandler::new(f.restaurants.clone(), f.branches.clone());

        let branch = handler
            .handle(GetBranchQuery {
                owner_id: owner(),
                branch_id: f.branch.id().clone(),
            })
            .await
            .unwrap();

        assert_eq!(branch, f.branch);
    }

    #[tokio::test]
    async fn stranger_is_forbidden() {
        let f = fixture().await;
        let handler = GetBranchHandler::new(f.restaurants.clone(), f.branches.clone());

        let result = handler
            .handle(GetBranchQuery {
                owner_id: stranger(),
                branch_id: f.branch.id().clone(),
            })
            .await;

        assert_eq!(result.unwrap_err(), RestaurantError::Forbidden);
    }

    #[tokio::test]
    async fn unknown_branch_is_not_found() {
        let f = fixture().await;
        let handler = GetBranchHandler::new(f.restaurants.clone(), f.branches.clone());

        let result = handler
            .handle(GetBranchQuery {
                owner_id: owner(),
                branch_id: BranchId::new("branch-404").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(RestaurantError::BranchNotFound(_))));
    }
}
