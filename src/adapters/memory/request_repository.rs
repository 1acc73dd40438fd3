//! In-memory service request repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RequestId, RestaurantId};
use crate::domain::request::ServiceRequest;
use crate::ports::RequestRepository;

/// In-memory storage for service requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequestRepository {
    requests: Arc<RwLock<HashMap<RequestId, ServiceRequest>>>,
}

impl InMemoryRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored requests.
    pub async fn count(&self) -> usize {
        self.requests.read().await.len()
    }

    async fn collect(
        &self,
        restaurant_id: &RestaurantId,
        pending_only: bool,
    ) -> Vec<ServiceRequest> {
        let mut requests: Vec<ServiceRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|r| r.restaurant_id() == restaurant_id)
            .filter(|r| !pending_only || r.is_pending())
            .cloned()
            .collect();
        requests.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        requests
    }
}

fn not_found(id: &RequestId) -> DomainError {
    DomainError::new(ErrorCode::RequestNotFound, format!("Request not found: {}", id))
}

#[async_trait]
impl RequestRepository for InMemoryRequestRepository {
    async fn save(&self, request: &ServiceRequest) -> Result<(), DomainError> {
        self.requests
            .write()
            .await
            .insert(*request.id(), request.clone());
        Ok(())
    }

    async fn update(&self, request: &ServiceRequest) -> Result<(), DomainError> {
        let mut requests = self.requests.write().await;
        match requests.get_mut(request.id()) {
            Some(stored) => {
                *stored = request.clone();
                Ok(())
            }
            None => Err(not_found(request.id())),
        }
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<ServiceRequest>, DomainError> {
        Ok(self.requests.read().await.get(id).cloned())
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<ServiceRequest>, DomainError> {
        Ok(self.collect(restaurant_id, false).await)
    }

    async fn find_pending_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<ServiceRequest>, DomainError> {
        Ok(self.collect(restaurant_id, true).await)
    }

    async fn delete(&self, id: &RequestId) -> Result<(), DomainError> {
        self.requests
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
