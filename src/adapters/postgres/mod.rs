//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresRestaurantRepository` - restaurants
//! - `PostgresBranchRepository` - branches
//! - `PostgresTableRepository` - tables, unique number per restaurant
//! - `PostgresRequestRepository` - service requests
//!
//! Schema lives in `migrations/` and is embedded with `sqlx::migrate!`.

mod branch_repository;
mod request_repository;
mod restaurant_repository;
mod table_repository;

pub use branch_repository::PostgresBranchRepository;
pub use request_repository::PostgresRequestRepository;
pub use restaurant_repository::PostgresRestaurantRepository;
pub use table_repository::PostgresTableRepository;

use sqlx::{postgres::PgRow, PgPool, Postgres, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};

/// Applies pending migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Builds a mapper from a sqlx error to a `DatabaseError`.
fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

/// Reads one column, reporting the column name on failure.
fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}

fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

/// Non-negative INTEGER column as `u32`.
fn unsigned(row: &PgRow, name: &str) -> Result<u32, DomainError> {
    let value: i32 = column(row, name)?;
    u32::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Negative value in {}: {}", name, value),
        )
    })
}

/// Maps an invalid stored identifier onto a `DatabaseError`.
fn corrupt(name: &str) -> impl Fn(crate::domain::foundation::ValidationError) -> DomainError + '_ {
    move |e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid {}: {}", name, e))
}
