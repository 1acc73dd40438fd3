//! UpdateRestaurantHandler - Command handler for editing an owned restaurant.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::restaurant::{Restaurant, RestaurantError, RestaurantUpdate};
use crate::ports::RestaurantRepository;

#[derive(Debug, Clone)]
pub struct UpdateRestaurantCommand {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
    pub update: RestaurantUpdate,
}

/// Handler for editing restaurant details.
pub struct UpdateRestaurantHandler {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl UpdateRestaurantHandler {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, cmd: UpdateRestaurantCommand) -> Result<Restaurant, RestaurantError> {
        let mut restaurant =
            super::owned_restaurant(self.restaurants.as_ref(), &cmd.restaurant_id, &cmd.owner_id)
                .await?;

        restaurant.apply_update(cmd.update)?;
        self.restaurants.save(&restaurant).await?;

        tracing::info!(restaurant_id = %restaurant.id(), "Restaurant updated");
        Ok(restaurant)
    }
}
