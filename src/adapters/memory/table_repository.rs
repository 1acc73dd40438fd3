//! In-memory table repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, RestaurantId, TableId};
use crate::domain::table::Table;
use crate::ports::TableRepository;

/// In-memory storage for tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableRepository {
    tables: Arc<RwLock<HashMap<TableId, Table>>>,
}

impl InMemoryTableRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tables.
    pub async fn count(&self) -> usize {
        self.tables.read().await.len()
    }
}

#[async_trait]
impl TableRepository for InMemoryTableRepository {
    async fn save(&self, table: &Table) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let taken = tables.values().any(|t| {
            t.id() != table.id() && t.belongs_to(table.restaurant_id()) && t.number() == table.number()
        });
        if taken {
            return Err(DomainError::new(
                ErrorCode::TableNumberTaken,
                format!("Table number {} already exists", table.number()),
            ));
        }
        tables.insert(table.id().clone(), table.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TableId) -> Result<Option<Table>, DomainError> {
        Ok(self.tables.read().await.get(id).cloned())
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Table>, DomainError> {
        let mut tables: Vec<Table> = self
            .tables
            .read()
            .await
            .values()
            .filter(|t| t.belongs_to(restaurant_id))
            .cloned()
            .collect();
        tables.sort_by_key(Table::number);
        Ok(tables)
    }

    async fn number_exists(
        &self,
        restaurant_id: &RestaurantId,
        number: u32,
    ) -> Result<bool, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .values()
            .any(|t| t.belongs_to(restaurant_id) && t.number() == number))
    }

    async fn delete(&self, id: &TableId) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TableNotFound, format!("Table not found: {}", id))
            })
    }
}
