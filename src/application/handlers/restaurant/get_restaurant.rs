//! GetRestaurantHandler - Query handler for a single owned restaurant.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::restaurant::{Restaurant, RestaurantError};
use crate::ports::RestaurantRepository;

/// Query for one restaurant, visible only to its owner.
#[derive(Debug, Clone)]
pub struct GetRestaurantQuery {
    pub restaurant_id: RestaurantId,
    pub owner_id: UserId,
}

/// Handler for fetching a restaurant.
pub struct GetRestaurantHandler {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl GetRestaurantHandler {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, query: GetRestaurantQuery) -> Result<Restaurant, RestaurantError> {
        super::owned_restaurant(
            self.restaurants.as_ref(),
            &query.restaurant_id,
            &query.owner_id,
        )
        .await
    }
}
