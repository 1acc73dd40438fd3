//! GetTableHandler - Query handler for a single owned table.

use std::sync::Arc;

use crate::domain::foundation::{TableId, UserId};
use crate::domain::table::{Table, TableError};
use crate::ports::{RestaurantRepository, TableRepository};

#[derive(Debug, Clone)]
pub struct GetTableQuery {
    pub owner_id: UserId,
    pub table_id: TableId,
}

pub struct GetTableHandler {
    restaurants: Arc<dyn RestaurantRepository>,
    tables: Arc<dyn TableRepository>,
}

impl GetTableHandler {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        tables: Arc<dyn TableRepository>,
    ) -> Self {
        Self {
            restaurants,
            tables,
        }
    }

    pub async fn handle(&self, query: GetTableQuery) -> Result<Table, TableError> {
        super::owned_table(
            self.restaurants.as_ref(),
            self.tables.as_ref(),
            &query.table_id,
            &query.owner_id,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{fixture, owner, stranger};
    use super::*;

    #[tokio::test]
    async fn owner_reads_table_with_its_qr_code() {
        let f = fixture().await;
        let handler = GetTableHandler::new(f.restaurants.clone(), f.tables.clone());

        let table = handler
            .handle(GetTableQuery {
                owner_id: owner(),
                table_id: f.table.id().clone(),
            })
            .await
            .unwrap();

        assert_eq!(table.qr_code(), f.table.qr_code());
    }

    #[tokio::test]
    async fn stranger_is_forbidden() {
        let f = fixture().await;
        let handler = GetTableHandler::new(f.restaurants.clone(), f.tables.clone());

        let result = handler
            .handle(GetTableQuery {
                owner_id: stranger(),
                table_id: f.table.id().clone(),
            })
            .await;

        assert_eq!(result.unwrap_err(), TableError::Forbidden);
    }

    #[tokio::test]
    async fn unknown_table_is_not_found() {
        let f = fixture().await;
        let handler = GetTableHandler::new(f.restaurants.clone(), f.tables.clone());

        let result = handler
            .handle(GetTableQuery {
                owner_id: owner(),
                table_id: TableId::new("table-404").unwrap(),
            })
            .await;

        assert!(matches!(result, Err(TableError::NotFound(_))));
    }
}
