//! ListOwnerRestaurantsHandler - Query handler for an owner's restaurants.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::restaurant::{Restaurant, RestaurantError};
use crate::ports::RestaurantRepository;

/// Query for every restaurant owned by a user.
#[derive(Debug, Clone)]
pub struct ListOwnerRestaurantsQuery {
    pub owner_id: UserId,
}

/// Handler for listing an owner's restaurants.
pub struct ListOwnerRestaurantsHandler {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl ListOwnerRestaurantsHandler {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(
        &self,
        query: ListOwnerRestaurantsQuery,
    ) -> Result<Vec<Restaurant>, RestaurantError> {
        Ok(self.restaurants.find_by_owner(&query.owner_id).await?)
    }
}
