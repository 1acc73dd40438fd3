//! PostgreSQL implementation of RequestRepository.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool};

use super::{column, corrupt, db_error, timestamp, unsigned};
use crate::domain::foundation::{
    BranchId, DomainError, ErrorCode, RequestId, RestaurantId, TableId,
};
use crate::domain::request::{RequestStatus, ServiceRequest};
use crate::ports::RequestRepository;

#[derive(Clone)]
pub struct PostgresRequestRepository {
    pool: PgPool,
}

impl PostgresRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str =
    "id, restaurant_id, branch_id, table_id, table_number, status, created_at, updated_at";

fn not_found(id: &RequestId) -> DomainError {
    DomainError::new(ErrorCode::RequestNotFound, format!("Request not found: {}", id))
}

#[async_trait]
impl RequestRepository for PostgresRequestRepository {
    async fn save(&self, request: &ServiceRequest) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO service_requests (
                id, restaurant_id, branch_id, table_id, table_number, status,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(request.restaurant_id().as_str())
        .bind(request.branch_id().as_str())
        .bind(request.table_id().as_str())
        .bind(request.table_number() as i32)
        .bind(request.status().as_str())
        .bind(request.created_at().as_datetime())
        .bind(request.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("insert service request"))?;

        Ok(())
    }

    async fn update(&self, request: &ServiceRequest) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE service_requests SET status = $2, updated_at = $3 WHERE id = $1",
        )
        .bind(request.id().as_uuid())
        .bind(request.status().as_str())
        .bind(request.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_error("update service request"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(request.id()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &RequestId) -> Result<Option<ServiceRequest>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM service_requests WHERE id = $1", COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("fetch service request"))?;

        row.as_ref().map(row_to_request).transpose()
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<ServiceRequest>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM service_requests WHERE restaurant_id = $1 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(restaurant_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch service requests"))?;

        rows.iter().map(row_to_request).collect()
    }

    async fn find_pending_by_restaurant(
        &self,
        restaurant_id: &RestaurantId,
    ) -> Result<Vec<ServiceRequest>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM service_requests \
             WHERE restaurant_id = $1 AND status = $2 ORDER BY created_at DESC",
            COLUMNS
        ))
        .bind(restaurant_id.as_str())
        .bind(RequestStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("fetch pending service requests"))?;

        rows.iter().map(row_to_request).collect()
    }

    async fn delete(&self, id: &RequestId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM service_requests WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete service request"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn row_to_request(row: &PgRow) -> Result<ServiceRequest, DomainError> {
    let id: uuid::Uuid = column(row, "id")?;
    let restaurant_id: String = column(row, "restaurant_id")?;
    let branch_id: String = column(row, "branch_id")?;
    let table_id: String = column(row, "table_id")?;
    let status: String = column(row, "status")?;

    Ok(ServiceRequest::reconstitute(
        RequestId::from_uuid(id),
        RestaurantId::new(restaurant_id).map_err(corrupt("restaurant_id"))?,
        BranchId::new(branch_id).map_err(corrupt("branch_id"))?,
        TableId::new(table_id).map_err(corrupt("table_id"))?,
        unsigned(row, "table_number")?,
        status.parse::<RequestStatus>().map_err(corrupt("status"))?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}
