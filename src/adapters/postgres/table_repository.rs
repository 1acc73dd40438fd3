//! PostgreSQL implementation of TableRepository.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool};

use super::{column, corrupt, db_error, timestamp, unsigned};
use crate::domain::foundation::{BranchId, DomainError, ErrorCode, RestaurantId, TableId};
use crate::domain::table::Table;
use crate::ports::TableRepository;

/// Postgres unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PostgresTableRepository {
    pool: PgPool,
}

impl PostgresTableRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, restaurant_id, branch_id, number, capacity, qr_code, is_active, created_at, updated_at";

#[async_trait]
impl TableRepository for PostgresTableRepository {
    async fn save(&self, table: &Table) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO restaurant_tables (
                id, restaurant_id, branch_id, number, capacity, qr_code,
                is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                number = EXCLUDED.number,
                capacity = EXCLUDED.capacity,
                qr_code = EXCLUDED.qr_code,
                is_active = EXCLUDED.is_active,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(table.id().as_str())
        .bind(table.restaurant_id().as_str())
        .bind(table.branch_id().as_str())
        .bind(table.number() as i32)
        .bind(table.capacity() as i32)
        .bind(table.qr_code())
        .bind(table.is_active())
        .bind(table.created_at().as_datetime())
        .bind(table.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let taken = e
                .as_database_error()
                .and_then(|db| db.code())
                .is_some_and(|code| code == UNIQUE_VIOLATION);
            if taken {
                DomainError::new(
                    ErrorCode::TableNumberTaken,
                    format!("Table number {} already exists", table.number()),
                )
            } else {
                db_error("save table")(e)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TableId) -> Result<Option<Table>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM restaurant_tables WHERE id = $1", COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch table"))?;

        row.as_ref().map(row_to_table).transpose()
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Table>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM restaurant_tables WHERE restaurant_id = $1 ORDER BY number ASC",
            COLUMNS
        ))
        .bind(restaurant_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch tables by restaurant"))?;

        rows.iter().map(row_to_table).collect()
    }

    async fn number_exists(
        &self,
        restaurant_id: &RestaurantId,
        number: u32,
    ) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM restaurant_tables WHERE restaurant_id = $1 AND number = $2)",
        )
        .bind(restaurant_id.as_str())
        .bind(number as i32)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("check table number"))?;

        Ok(result.0)
    }

    async fn delete(&self, id: &TableId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM restaurant_tables WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete table"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TableNotFound,
                format!("Table not found: {}", id),
            ));
        }
        Ok(())
    }
}

fn row_to_table(row: &PgRow) -> Result<Table, DomainError> {
    let id: String = column(row, "id")?;
    let restaurant_id: String = column(row, "restaurant_id")?;
    let branch_id: String = column(row, "branch_id")?;

    Ok(Table::reconstitute(
        TableId::new(id).map_err(corrupt("table id"))?,
        RestaurantId::new(restaurant_id).map_err(corrupt("restaurant_id"))?,
        BranchId::new(branch_id).map_err(corrupt("branch_id"))?,
        unsigned(row, "number")?,
        unsigned(row, "capacity")?,
        column(row, "qr_code")?,
        column(row, "is_active")?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}
