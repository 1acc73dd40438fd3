//! DeleteRequestHandler - owner removes a request.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::request::RequestError;
use crate::ports::{RequestRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct DeleteRequestCommand {
    pub owner_id: UserId,
    pub request_id: RequestId,
}

pub struct DeleteRequestHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl DeleteRequestHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        requests: Arc<dyn RequestRepository>,
    ) -> Self {
        Self {
            restaurants,
            requests,
        }
    }

    pub async fn handle(&self, cmd: DeleteRequestCommand) -> Result<(), RequestError> {
        let request = self
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

        self.requests.delete(&cmd.request_id).await?;
        tracing::info!(request_id = %cmd.request_id, "Service request deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{fixture, owner, stranger};
    use super::*;

    #[tokio::test]
    async fn owner_deletes_request() {
        let f = fixture().await;
        let handler = DeleteRequestHandler::new(f.restaurants.clone(), f.requests.clone());

        handler
            .handle(DeleteRequestCommand {
                owner_id: owner(),
                request_id: *f.request.id(),
            })
            .await
            .unwrap();

        assert_eq!(f.requests.count().await, 0);
    }

    #[tokio::test]
    async fn stranger_cannot_delete() {
        let f = fixture().await;
        let handler = DeleteRequestHandler::new(f.restaurants.clone(), f.requests.clone());

        let result = handler
            .handle(DeleteRequestCommand {
                owner_id: stranger(),
                request_id: *f.request.id(),
            })
            .await;

        assert_eq!(result.unwrap_err(), RequestError::Forbidden);
        assert_eq!(f.requests.count().await, 1);
    }
}
