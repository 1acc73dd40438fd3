//! Strongly-typed identifier value objects.
//!
//! Restaurant, branch and table identifiers are opaque strings: they travel
//! in plaintext inside table QR URLs and are hashed verbatim into the QR
//! proof, so they keep whatever form the issuing store gave them, except
//! that they may not contain [`COORDINATE_DELIMITER`]. New entities get a
//! UUID v4 rendered as a string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Separator of the QR proof's canonical string. Restaurant, branch and
/// table ids may not contain it, so distinct coordinates never join into
/// the same canonical text.
pub const COORDINATE_DELIMITER: char = ':';

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal, reserved = $reserved:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from an existing value, rejecting blanks
            /// and reserved characters.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                let reserved: Option<char> = $reserved;
                if let Some(c) = reserved.filter(|c| id.contains(*c)) {
                    return Err(ValidationError::invalid_format(
                        $field,
                        format!("must not contain '{}'", c),
                    ));
                }
                Ok(Self(id))
            }

            /// Generates a fresh random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a restaurant (the tenant).
    RestaurantId,
    "restaurant_id",
    reserved = Some(COORDINATE_DELIMITER)
);

string_id!(
    /// Unique identifier for a branch of a restaurant.
    BranchId,
    "branch_id",
    reserved = Some(COORDINATE_DELIMITER)
);

string_id!(
    /// Unique identifier for a table inside a branch.
    TableId,
    "table_id",
    reserved = Some(COORDINATE_DELIMITER)
);

string_id!(
    /// User identifier (the `userId` claim of a validated token).
    UserId,
    "user_id",
    reserved = None
);

/// Unique identifier for a service request raised from a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new random RequestId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a RequestId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a live dashboard push connection.
///
/// Generated server-side when a client upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Create a new random connection ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
