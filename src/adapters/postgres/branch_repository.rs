//! PostgreSQL implementation of BranchRepository.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool};

use super::{column, corrupt, db_error, timestamp};
use crate::domain::foundation::{BranchId, DomainError, ErrorCode, RestaurantId};
use crate::domain::restaurant::Branch;
use crate::ports::BranchRepository;

#[derive(Clone)]
pub struct PostgresBranchRepository {
    pool: PgPool,
}

impl PostgresBranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, restaurant_id, address, description, is_active, created_at, updated_at";

#[async_trait]
impl BranchRepository for PostgresBranchRepository {
    async fn save(&self, branch: &Branch) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO branches (
                id, restaurant_id, address, description, is_active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                address = EXCLUDED.address,
                description = EXCLUDED.description,
                is_active = EXCLUDED.is_active,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(branch.id().as_str())
        .bind(branch.restaurant_id().as_str())
        .bind(branch.address())
        .bind(branch.description())
        .bind(branch.is_active())
        .bind(branch.created_at().as_datetime())
        .bind(branch.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("save branch"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &BranchId) -> Result<Option<Branch>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM branches WHERE id = $1", COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch branch"))?;

        row.as_ref().map(row_to_branch).transpose()
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<Branch>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM branches WHERE restaurant_id = $1 ORDER BY created_at ASC",
            COLUMNS
        ))
        .bind(restaurant_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch branches by restaurant"))?;

        rows.iter().map(row_to_branch).collect()
    }

    async fn delete(&self, id: &BranchId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete branch"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::BranchNotFound,
                format!("Branch not found: {}", id),
            ));
        }
        Ok(())
    }
}

fn row_to_branch(row: &PgRow) -> Result<Branch, DomainError> {
    let id: String = column(row, "id")?;
    let restaurant_id: String = column(row, "restaurant_id")?;

    Ok(Branch::reconstitute(
        BranchId::new(id).map_err(corrupt("branch id"))?,
        RestaurantId::new(restaurant_id).map_err(corrupt("restaurant_id"))?,
        column(row, "address")?,
        column(row, "description")?,
        column(row, "is_active")?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}
