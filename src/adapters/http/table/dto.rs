//! Data transfer objects for table endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::table::{Table, TableUpdate, DEFAULT_CAPACITY};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableRequest {
    pub restaurant_id: String,
    pub branch_id: String,
    pub number: u32,
    pub capacity: u32,
}

/// Absent fields are left unchanged. A new number re-issues the QR code.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableRequest {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<UpdateTableRequest> for TableUpdate {
    fn from(req: UpdateTableRequest) -> Self {
        Self {
            number: req.number,
            capacity: req.capacity,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateTablesRequest {
    pub restaurant_id: String,
    pub branch_id: String,
    pub count: u32,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub id: String,
    pub restaurant_id: String,
    pub branch_id: String,
    pub number: u32,
    pub capacity: u32,
    /// Diner-facing URL to print as the table's QR code.
    pub qr_code: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Table> for TableResponse {
    fn from(t: &Table) -> Self {
        Self {
            id: t.id().to_string(),
            restaurant_id: t.restaurant_id().to_string(),
            branch_id: t.branch_id().to_string(),
            number: t.number(),
            capacity: t.capacity(),
            qr_code: t.qr_code().to_string(),
            is_active: t.is_active(),
            created_at: t.created_at().to_rfc3339(),
            updated_at: t.updated_at().to_rfc3339(),
        }
    }
}
