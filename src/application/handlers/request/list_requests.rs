//! ListRequestsHandler - Query handler for a restaurant's service requests.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::request::{RequestError, ServiceRequest};
use crate::ports::{RequestRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct ListRequestsQuery {
    pub owner_id: UserId,
    pub restaurant_id: RestaurantId,
    /// Only requests still waiting for staff.
    pub pending_only: bool,
}

/// Handler for listing requests, newest first.
pub struct ListRequestsHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl ListRequestsHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        requests: Arc<dyn RequestRepository>,
    ) -> Self {
        Self {
            restaurants,
            requests,
        }
    }

    pub async fn handle(&self, query: ListRequestsQuery) -> Result<Vec<ServiceRequest>, RequestError> {
        super::owned_restaurant(
            self.restaurants.as_ref(),
            &query.restaurant_id,
            &query.owner_id,
        )
        .await?;

        let requests = if query.pending_only {
            self.requests
                .find_pending_by_restaurant(&query.restaurant_id)
                .await?
        } else {
            self.requests.find_by_restaurant(&query.restaurant_id).await?
        };
        Ok(requests)
    }
}
