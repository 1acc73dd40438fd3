//! Restaurant module - tenants and their branches.
//!
//! A restaurant belongs to exactly one owner. Branches are physical
//! locations of a restaurant; tables live inside a branch.

mod branch;
mod errors;
mod restaurant;

pub use branch::{Branch, BranchUpdate, MAX_BRANCH_ADDRESS_LENGTH, MAX_DESCRIPTION_LENGTH};
pub use errors::RestaurantError;
pub use restaurant::{Restaurant, RestaurantDetails, RestaurantUpdate};

use crate::domain::foundation::ValidationError;

/// Checks that a trimmed text field has a length within `min..=max`.
pub(crate) fn validate_length(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len == 0 && min > 0 {
        return Err(ValidationError::empty_field(field));
    }
    if len < min || len > max {
        return Err(ValidationError::out_of_range(
            field,
            min as i64,
            max as i64,
            len as i64,
        ));
    }
    Ok(())
}
