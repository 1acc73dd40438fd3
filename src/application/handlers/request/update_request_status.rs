//! UpdateRequestStatusHandler - owner marks a request attended or cancelled.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::request::{RequestError, RequestStatus, ServiceRequest};
use crate::ports::{RequestRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct UpdateRequestStatusCommand {
    pub owner_id: UserId,
    pub request_id: RequestId,
    pub status: RequestStatus,
}

/// Handler for status changes.
pub struct UpdateRequestStatusHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl UpdateRequestStatusHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        requests: Arc<dyn RequestRepository>,
    ) -> Self {
        Self {
            restaurants,
            requests,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateRequestStatusCommand,
    ) -> Result<ServiceRequest, RequestError> {
        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or(RequestError::NotFound(cmd.request_id))?;

        super::owned_restaurant(
            self.restaurants.as_ref(),
            request.restaurant_id(),
            &cmd.owner_id,
        )
        .await?;

        request.update_status(cmd.status);
        self.requests.update(&request).await?;

        tracing::info!(
            request_id = %request.id(),
            status = %request.status(),
            "Service request status updated"
        );
        Ok(request)
    }
}
