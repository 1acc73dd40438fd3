//! DeleteRestaurantHandler - owner removes a restaurant.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, RestaurantId, UserId};
use crate::domain::restaurant::RestaurantError;
use crate::ports::RestaurantRepository;

#[derive(Debug, Clone)]
pub struct DeleteRestaurantCommand {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
}

pub struct DeleteRestaurantHandler {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl DeleteRestaurantHandler {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, cmd: DeleteRestaurantCommand) -> Result<(), RestaurantError> {
        super::owned_restaurant(self.restaurants.as_ref(), &cmd.restaurant_id, &cmd.owner_id)
            .await?;

        self.restaurants
            .delete(&cmd.restaurant_id)
            .await
            .map_err(|e| match e.code {
                ErrorCode::RestaurantNotFound => {
                    RestaurantError::NotFound(cmd.restaurant_id.clone())
                }
                _ => RestaurantError::from(e),
            })?;
        tracing::info!(restaurant_id = %cmd.restaurant_id, "Restaurant deleted");
        Ok(())
    }
}
