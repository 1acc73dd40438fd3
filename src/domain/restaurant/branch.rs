//! Branch entity - a physical location of a restaurant.

use serde::{Deserialize, Serialize};

use super::validate_length;
use crate::domain::foundation::{BranchId, RestaurantId, Timestamp, ValidationError};

/// Maximum length for a branch address.
pub const MAX_BRANCH_ADDRESS_LENGTH: usize = 200;

/// Maximum length for free-text descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Owner edits to a branch. `None` leaves a field unchanged; a blank
/// description clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchUpdate {
    pub address: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// A branch of a restaurant. Tables are provisioned per branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    id: BranchId,
    restaurant_id: RestaurantId,
    address: String,
    description: Option<String>,
    is_active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Branch {
    /// Create a new active branch.
    pub fn new(
        id: BranchId,
        restaurant_id: RestaurantId,
        address: String,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        validate_length("address", &address, 1, MAX_BRANCH_ADDRESS_LENGTH)?;
        if let Some(description) = &description {
            validate_length("description", description, 0, MAX_DESCRIPTION_LENGTH)?;
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            restaurant_id,
            address: address.trim().to_string(),
            description,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a branch from persistence (no validation).
    pub fn reconstitute(
        id: BranchId,
        restaurant_id: RestaurantId,
        address: String,
        description: Option<String>,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            restaurant_id,
            address,
            description,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &BranchId {
        &self.id
    }

    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
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

    /// Returns true if this branch belongs to `restaurant_id`.
    pub fn belongs_to(&self, restaurant_id: &RestaurantId) -> bool {
        &self.restaurant_id == restaurant_id
    }

    /// Activates or deactivates the branch.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Timestamp::now();
    }

    /// Applies owner edits. Nothing changes when validation fails.
    pub fn apply_update(&mut self, update: BranchUpdate) -> Result<(), ValidationError> {
        if let Some(address) = &update.address {
            validate_length("address", address, 1, MAX_BRANCH_ADDRESS_LENGTH)?;
        }
        if let Some(description) = &update.description {
            validate_length("description", description, 0, MAX_DESCRIPTION_LENGTH)?;
        }

        if let Some(address) = update.address {
            self.address = address.trim().to_string();
        }
        if let Some(description) = update.description {
            let description = description.trim();
            self.description = (!description.is_empty()).then(|| description.to_string());
        }
        if let Some(active) = update.is_active {
            self.is_active = active;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
