//! Service request entity - "bring the bill" calls raised from a table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    BranchId, RequestId, RestaurantId, TableId, Timestamp, ValidationError,
};

/// Lifecycle status of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Attended,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Attended => "attended",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "attended" => Ok(RequestStatus::Attended),
            "cancelled" => Ok(RequestStatus::Cancelled),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("expected one of pending, attended, cancelled; got '{}'", other),
            )),
        }
    }
}

/// A request raised by a diner from a table QR code.
///
/// Created `Pending`; the owner moves it to `Attended` or `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    id: RequestId,
    restaurant_id: RestaurantId,
    branch_id: BranchId,
    table_id: TableId,
    table_number: u32,
    status: RequestStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl ServiceRequest {
    /// Create a new pending request for a table.
    pub fn new(
        restaurant_id: RestaurantId,
        branch_id: BranchId,
        table_id: TableId,
        table_number: u32,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: RequestId::new(),
            restaurant_id,
            branch_id,
            table_id,
            table_number,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a request from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RequestId,
        restaurant_id: RestaurantId,
        branch_id: BranchId,
        table_id: TableId,
        table_number: u32,
        status: RequestStatus,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            branch_id,
            table_id,
            table_number,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    pub fn branch_id(&self) -> &BranchId {
        &self.branch_id
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub fn table_number(&self) -> u32 {
        self.table_number
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Moves the request to `status`, touching `updated_at`.
    pub fn update_status(&mut self, status: RequestStatus) {
        self.status = status;
        self.updated_at = Timestamp::now();
    }
}
