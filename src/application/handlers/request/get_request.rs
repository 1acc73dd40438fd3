//! GetRequestHandler - Query handler for a single service request.

use std::sync::Arc;

use crate::domain::foundation::{RequestId, UserId};
use crate::domain::request::{RequestError, ServiceRequest};
use crate::ports::{RequestRepository, RestaurantRepository};

#[derive(Debug, Clone)]
pub struct GetRequestQuery {
    pub owner_id: UserId,
    pub request_id: RequestId,
}

/// Handler for fetching a request owned through its restaurant.
pub struct GetRequestHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    requests: Arc<dyn RequestRepository>,
}

impl GetRequestHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        requests: Arc<dyn RequestRepository>,
    ) -> Self {
        Self {
            restaurants,
            requests,
        }
    }

    pub async fn handle(&self, query: GetRequestQuery) -> Result<ServiceRequest, RequestError> {
        let request = self
            .requests
            .find_by_id(&query.request_id)
            .await?
            .ok_or(RequestError::NotFound(query.request_id))?;

        super::owned_restaurant(
            self.restaurants.as_ref(),
            request.restaurant_id(),
            &query.owner_id,
        )
        .await?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{fixture, owner, stranger};
    use super::*;

    #[tokio::test]
    async fn owner_reads_request() {
        let f = fixture().await;
        let handler = GetRequestHandler::new(f.restaurants.clone(), f.requests.clone());

        let request = handler
            .handle(GetRequestQuery {
                owner_id: owner(),
                request_id: *f.request.id(),
            })
            .await
            .unwrap();

        assert_eq!(request, f.request);
    }

    #[tokio::test]
    async fn stranger_is_forbidden() {
        let f = fixture().await;
        let handler = GetRequestHandler::new(f.restaurants.clone(), f.requests.clone());

        let result = handler
            .handle(GetRequestQuery {
                owner_id: stranger(),
                request_id: *f.request.id(),
            })
            .await;

        assert_eq!(result.unwrap_err(), RequestError::Forbidden);
    }

    #[tokio::test]
    async fn unknown_request_is_not_found() {
        let f = fixture().await;
        let handler = GetRequestHandler::new(f.restaurants.clone(), f.requests.clone());

        let result = handler
            .handle(GetRequestQuery {
                owner_id: owner(),
                request_id: RequestId::new(),
            })
            .await;

        assert!(matches!(result, Err(RequestError::NotFound(_))));
    }
}
