//! Restaurant aggregate.

use serde::{Deserialize, Serialize};

use super::{validate_length, MAX_DESCRIPTION_LENGTH};
use crate::domain::foundation::{RestaurantId, Timestamp, UserId, ValidationError};

/// Descriptive fields supplied by the owner when creating a restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub description: Option<String>,
}

impl RestaurantDetails {
    /// Validates field lengths: name 3-100, address 5-200, phone 8-20,
    /// description at most 500 characters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_length("name", &self.name, 3, 100)?;
        validate_length("address", &self.address, 5, 200)?;
        validate_length("phone", &self.phone, 8, 20)?;
        if let Some(description) = &self.description {
            validate_length("description", description, 0, MAX_DESCRIPTION_LENGTH)?;
        }
        Ok(())
    }
}

/// Owner edits to a restaurant. `None` leaves a field unchanged; a blank
/// description clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
}

impl RestaurantUpdate {
    /// Same bounds as [`RestaurantDetails::validate`], for the fields present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_length("name", name, 3, 100)?;
        }
        if let Some(address) = &self.address {
            validate_length("address", address, 5, 200)?;
        }
        if let Some(phone) = &self.phone {
            validate_length("phone", phone, 8, 20)?;
        }
        if let Some(description) = &self.description {
            validate_length("description", description, 0, MAX_DESCRIPTION_LENGTH)?;
        }
        Ok(())
    }
}

/// Restaurant aggregate - the tenant boundary.
///
/// # Invariants
///
/// - `owner_id` never changes after creation
/// - descriptive fields satisfy [`RestaurantDetails::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    id: RestaurantId,
    owner_id: UserId,
    name: String,
    address: String,
    phone: String,
    description: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Restaurant {
    /// Create a new restaurant owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when any descriptive field is out of bounds.
    pub fn new(
        id: RestaurantId,
        owner_id: UserId,
        details: RestaurantDetails,
    ) -> Result<Self, ValidationError> {
        details.validate()?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner_id,
            name: details.name.trim().to_string(),
            address: details.address.trim().to_string(),
            phone: details.phone.trim().to_string(),
            description: details.description.map(|d| d.trim().to_string()),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a restaurant from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: RestaurantId,
        owner_id: UserId,
        name: String,
        address: String,
        phone: String,
        description: Option<String>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            address,
            phone,
            description,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &RestaurantId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true if `user_id` owns this restaurant.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Applies owner edits. Nothing changes when validation fails.
    pub fn apply_update(&mut self, update: RestaurantUpdate) -> Result<(), ValidationError> {
        update.validate()?;

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(address) = update.address {
            self.address = address.trim().to_string();
        }
        if let Some(phone) = update.phone {
            self.phone = phone.trim().to_string();
        }
        if let Some(description) = update.description {
            let description = description.trim();
            self.description = (!description.is_empty()).then(|| description.to_string());
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
