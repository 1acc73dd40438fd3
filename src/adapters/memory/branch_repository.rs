//! In-memory branch repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{BranchId, DomainError, ErrorCode, RestaurantId};
use crate::domain::restaurant::Branch;
use crate::ports::BranchRepository;

/// In-memory storage for branches.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBranchRepository {
    branches: Arc<RwLock<HashMap<BranchId, Branch>>>,
}

impl InMemoryBranchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored branches.
    pub async fn count(&self) -> usize {
        self.branches.read().await.len()
    }
}

#[async_trait]
impl BranchRepository for InMemoryBranchRepository {
    async fn save(&self, branch: &Branch) -> Result<(), DomainError> {
        self.branches
            .write()
            .await
            .insert(branch.id().clone(), branch.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BranchId) -> Result<Option<Branch>, DomainError> {
        Ok(self.branches.read().await.get(id).cloned())
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Branch>, DomainError> {
        let mut branches: Vec<Branch> = self
            .branches
            .read()
            .await
            .values()
            .filter(|b| b.belongs_to(restaurant_id))
            .cloned()
            .collect();
        branches.sort_by(|a, b| a.created_at().cmp(b.created_at()));
        Ok(branches)
    }

    async fn delete(&self, id: &BranchId) -> Result<(), DomainError> {
        self.branches
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::BranchNotFound, format!("Branch not found: {}", id))
            })
    }
}
