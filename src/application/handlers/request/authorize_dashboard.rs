//! AuthorizeDashboardHandler - gate in front of the live dashboard socket.

use std::sync::Arc;

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::request::RequestError;
use crate::domain::restaurant::Restaurant;
use crate::ports::RestaurantRepository;

/// Who wants to watch which restaurant.
#[derive(Debug, Clone)]
pub struct AuthorizeDashboardQuery {
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
}

/// Checks that a user may subscribe to a restaurant's live events.
///
/// Runs before the WebSocket upgrade so that refusals are plain HTTP
/// responses (404 unknown restaurant, 403 not the owner).
pub struct AuthorizeDashboardHandler {
    restaurants: Arc<dyn RestaurantRepository>,
}

impl AuthorizeDashboardHandler {
    pub fn new(restaurants: Arc<dyn RestaurantRepository>) -> Self {
        Self { restaurants }
    }

    pub async fn handle(&self, query: AuthorizeDashboardQuery) -> Result<Restaurant, RequestError> {
        super::owned_restaurant(
            self.restaurants.as_ref(),
            &query.restaurant_id,
            &query.user_id,
        )
        .await
    }
}
