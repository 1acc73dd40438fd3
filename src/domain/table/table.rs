//! Table entity.

use serde::{Deserialize, Serialize};

use super::qr_proof::TableCoordinates;
use crate::domain::foundation::{BranchId, RestaurantId, TableId, Timestamp, ValidationError};

/// Smallest seat count a table may declare.
pub const MIN_CAPACITY: u32 = 1;

/// Largest seat count a table may declare.
pub const MAX_CAPACITY: u32 = 20;

/// Seats given to tables created in bulk when the owner names none.
pub const DEFAULT_CAPACITY: u32 = 4;

/// Owner edits to a table. `None` leaves a field unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableUpdate {
    pub number: Option<u32>,
    pub capacity: Option<u32>,
    pub is_active: Option<bool>,
}

fn validate_number(number: u32) -> Result<(), ValidationError> {
    if number < 1 {
        return Err(ValidationError::out_of_range(
            "number",
            1,
            i64::from(u32::MAX),
            i64::from(number),
        ));
    }
    Ok(())
}

fn validate_capacity(capacity: u32) -> Result<(), ValidationError> {
    if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
        return Err(ValidationError::out_of_range(
            "capacity",
            i64::from(MIN_CAPACITY),
            i64::from(MAX_CAPACITY),
            i64::from(capacity),
        ));
    }
    Ok(())
}

/// A numbered table inside a branch.
///
/// # Invariants
///
/// - `number >= 1`, unique within the restaurant
/// - `capacity` within `MIN_CAPACITY..=MAX_CAPACITY`
/// - `qr_code` is the diner-facing URL for exactly these coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    id: TableId,
    restaurant_id: RestaurantId,
    branch_id: BranchId,
    number: u32,
    capacity: u32,
    qr_code: String,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Table {
    /// Provision a new active table and stamp its QR URL.
    pub fn new(
        id: TableId,
        restaurant_id: RestaurantId,
        branch_id: BranchId,
        number: u32,
        capacity: u32,
        qr_base_url: &str,
    ) -> Result<Self, ValidationError> {
        validate_number(number)?;
        validate_capacity(capacity)?;

        let now = Timestamp::now();
        let mut table = Self {
            id,
            restaurant_id,
            branch_id,
            number,
            capacity,
            qr_code: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        table.qr_code = table.coordinates().qr_url(qr_base_url);
        Ok(table)
    }

    /// Reconstitute a table from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: TableId,
        restaurant_id: RestaurantId,
        branch_id: BranchId,
        number: u32,
        capacity: u32,
        qr_code: String,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            branch_id,
            number,
            capacity,
            qr_code,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &TableId {
        &self.id
    }

    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    pub fn branch_id(&self) -> &BranchId {
        &self.branch_id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn qr_code(&self) -> &str {
        &self.qr_code
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// The coordinates bound into this table's QR proof.
    pub fn coordinates(&self) -> TableCoordinates {
        TableCoordinates {
            restaurant_id: self.restaurant_id.clone(),
            branch_id: self.branch_id.clone(),
            table_id: self.id.clone(),
            table_number: self.number,
        }
    }

    /// Returns true if this table belongs to `restaurant_id`.
    pub fn belongs_to(&self, restaurant_id: &RestaurantId) -> bool {
        &self.restaurant_id == restaurant_id
    }

    /// Activates or deactivates the table.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Timestamp::now();
    }

    /// Applies owner edits. A new number re-stamps `qr_code`, so codes
    /// printed for the old number stop verifying against this table.
    ///
    /// Nothing changes when validation fails.
    pub fn apply_update(
        &mut self,
        update: TableUpdate,
        qr_base_url: &str,
    ) -> Result<(), ValidationError> {
        if let Some(number) = update.number {
            validate_number(number)?;
        }
        if let Some(capacity) = update.capacity {
            validate_capacity(capacity)?;
        }

        if let Some(capacity) = update.capacity {
            self.capacity = capacity;
        }
        if let Some(active) = update.is_active {
            self.is_active = active;
        }
        if let Some(number) = update.number.filter(|n| *n != self.number) {
            self.number = number;
            self.qr_code = self.coordinates().qr_url(qr_base_url);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
