//! PostgreSQL implementation of RestaurantRepository.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool};

use super::{column, corrupt, db_error, timestamp};
use crate::domain::foundation::{DomainError, ErrorCode, RestaurantId, UserId};
use crate::domain::restaurant::Restaurant;
use crate::ports::RestaurantRepository;

#[derive(Clone)]
pub struct PostgresRestaurantRepository {
    pool: PgPool,
}

impl PostgresRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, owner_id, name, address, phone, description, created_at, updated_at";

#[async_trait]
impl RestaurantRepository for PostgresRestaurantRepository {
    async fn save(&self, restaurant: &Restaurant) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO restaurants (
                id, owner_id, name, address, phone, description, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                description = EXCLUDED.description,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(restaurant.id().as_str())
        .bind(restaurant.owner_id().as_str())
        .bind(restaurant.name())
        .bind(restaurant.address())
        .bind(restaurant.phone())
        .bind(restaurant.description())
        .bind(restaurant.created_at().as_datetime())
        .bind(restaurant.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("save restaurant"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM restaurants WHERE id = $1", COLUMNS))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch restaurant"))?;

        row.as_ref().map(row_to_restaurant).transpose()
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Restaurant>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM restaurants WHERE owner_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch restaurants by owner"))?;

        rows.iter().map(row_to_restaurant).collect()
    }

    async fn delete(&self, id: &RestaurantId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete restaurant"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RestaurantNotFound,
                format!("Restaurant not found: {}", id),
            ));
        }
        Ok(())
    }
}

fn row_to_restaurant(row: &PgRow) -> Result<Restaurant, DomainError> {
    let id: String = column(row, "id")?;
    let owner_id: String = column(row, "owner_id")?;

    Ok(Restaurant::reconstitute(
        RestaurantId::new(id).map_err(corrupt("restaurant id"))?,
        UserId::new(owner_id).map_err(corrupt("owner_id"))?,
        column(row, "name")?,
        column(row, "address")?,
        column(row, "phone")?,
        column(row, "description")?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}
