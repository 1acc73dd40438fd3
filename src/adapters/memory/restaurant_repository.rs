//! In-memory restaurant repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RestaurantId, UserId};
use crate::domain::restaurant::Restaurant;
use crate::ports::RestaurantRepository;

/// In-memory storage for restaurants.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRestaurantRepository {
    restaurants: Arc<RwLock<HashMap<RestaurantId, Restaurant>>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored restaurants.
    pub async fn count(&self) -> usize {
        self.restaurants.read().await.len()
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn save(&self, restaurant: &Restaurant) -> Result<(), DomainError> {
        self.restaurants
            .write()
            .await
            .insert(restaurant.id().clone(), restaurant.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        Ok(self.restaurants.read().await.get(id).cloned())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Restaurant>, DomainError> {
        let mut owned: Vec<Restaurant> = self
            .restaurants
            .read()
            .await
            .values()
            .filter(|r| r.is_owned_by(owner_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, id: &RestaurantId) -> Result<(), DomainError> {
        self.restaurants
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::RestaurantNotFound,
                    format!("Restaurant not found: {}", id),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::restaurant::RestaurantDetails;

    fn restaurant(owner: &str, name: &str) -> Restaurant {
        Restaurant::new(
            RestaurantId::generate(),
            UserId::new(owner).unwrap(),
            RestaurantDetails {
                name: name.to_string(),
                address: "Av. Siempre Viva 742".to_string(),
                phone: "11 5555 0000".to_string(),
                description: None,
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn finds_saved_restaurant_by_id() {
        let repo = InMemoryRestaurantRepository::new();
        let saved = restaurant("owner-1", "El Ciervo");
        repo.save(&saved).await.unwrap();

        let found = repo.find_by_id(saved.id()).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn find_by_owner_filters_other_owners() {
        let repo = InMemoryRestaurantRepository::new();
        repo.save(&restaurant("owner-1", "El Ciervo")).await.unwrap();
        repo.save(&restaurant("owner-2", "La Farola")).await.unwrap();

        let owned = repo
            .find_by_owner(&UserId::new("owner-1").unwrap())
            .await
            .unwrap();

        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name(), "El Ciervo");
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn delete_removes_only_that_restaurant() {
        let repo = InMemoryRestaurantRepository::new();
        let gone = restaurant("owner-1", "El Ciervo");
        repo.save(&gone).await.unwrap();
        repo.save(&restaurant("owner-1", "La Farola")).await.unwrap();

        repo.delete(gone.id()).await.unwrap();

        assert_eq!(repo.count().await, 1);
        let err = repo.delete(gone.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RestaurantNotFound);
    }
}
