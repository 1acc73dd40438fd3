//! ListBranchesHandler - Query handler for a restaurant's branches.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::restaurant::{Branch, RestaurantError};
use crate::ports::{BranchRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct ListBranchesQuery {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
}

/// Handler for listing branches of an owned restaurant.
pub struct ListBranchesHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    branches: Arc<dyn BranchRepository>,
}

impl ListBranchesHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        branches: Arc<dyn BranchRepository>,
    ) -> Self {
        Self {
            restaurants,
            branches,
        }
    }

    pub async fn handle(&self, query: ListBranchesQuery) -> Result<Vec<Branch>, RestaurantError> {
        super::owned_restaurant(
            self.restaurants.as_ref(),
            &query.restaurant_id,
            &query.owner_id,
        )
        .await?;

        Ok(self.branches.find_by_restaurant(&query.restaurant_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryBranchRepository, InMemoryRestaurantRepository};

    #[tokio::test]
    async fn unknown_restaurant_is_not_found() {
        let handler = ListBranchesHandler::new(
            Arc::new(InMemoryRestaurantRepository::new()),
            Arc::new(InMemoryBranchRepository::new()),
        );

        let result = handler
            .handle(ListBranchesQuery {
                owner_id: UserId::new("owner-1").unwrap(),
                restaurant_id: RestaurantId::new("nowhere").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(RestaurantError::NotFound(_))));
    }
}
