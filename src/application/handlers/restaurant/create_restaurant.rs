//! CreateRestaurantHandler - Command handler for registering a restaurant.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::restaurant::{Restaurant, RestaurantDetails, RestaurantError};
use crate::ports::RestaurantRepository;

/// Command to create a new restaurant owned by the caller.
#[derive(Debug, Clone)]
pub struct CreateRestaurantCommand {
    pub owner_id: UserId,
    pub details: RestaurantDetails,
}

/// Handler for creating restaurants.
pub struct CreateRestaurantHandler {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl CreateRestaurantHandler {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, cmd: CreateRestaurantCommand) -> Result<Restaurant, RestaurantError> {
        let restaurant = Restaurant::new(RestaurantId::generate(), cmd.owner_id, cmd.details)?;
        self.restaurants.save(&restaurant).await?;

        tracing::info!(
            restaurant_id = %restaurant.id(),
            owner_id = %restaurant.owner_id(),
            "Restaurant created"
        );
        Ok(restaurant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRestaurantRepository;

    fn details(name: &str) -> RestaurantDetails {
        RestaurantDetails {
            name: name.to_string(),
            address: "Av. Corrientes 1234".to_string(),
            phone: "11 5555 0000".to_string(),
            description: Some("Parrilla".to_string()),
        }
    }

    #[tokio::test]
    async fn persists_new_restaurant() {
        let repo = Arc::new(InMemoryRestaurantRepository::new());
        let handler = CreateRestaurantHandler::new(repo.clone());

        let restaurant = handler
            .handle(CreateRestaurantCommand {
                owner_id: UserId::new("owner-1").unwrap(),
                details: details("La Esquina"),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(restaurant.id()).await.unwrap();
        assert_eq!(stored, Some(restaurant));
    }

    #[tokio::test]
    async fn invalid_details_are_not_persisted() {
        let repo = Arc::new(InMemoryRestaurantRepository::new());
        let handler = CreateRestaurantHandler::new(repo.clone());

        let result = handler
            .handle(CreateRestaurantCommand {
                owner_id: UserId::new("owner-1").unwrap(),
                details: details("ab"),
            })
            .await;

        assert!(matches!(
            result,
            Err(RestaurantError::ValidationFailed { ref field, .. }) if field == "name"
        ));
        assert_eq!(repo.count().await, 0);
    }
}
