//! Table QR capability proofs.
//!
//! A printed table QR code carries the plaintext coordinates of the table
//! (restaurant, branch, table, table number) plus a short proof `h` derived
//! from them:
//!
//! ```text
//! canonical = "{restaurant}:{branch}:{table}:{number}"
//! proof     = base64url(sha256(canonical))[..16]
//! ```
//!
//! Verification recomputes the proof from the claimed coordinates and
//! compares it with the presented one. A change in any coordinate yields a
//! different proof.
//!
//! # Security
//!
//! The digest is unkeyed: anyone who knows the scheme can mint a valid proof
//! for arbitrary coordinates. The proof detects casual URL tampering (editing
//! the table number by hand); it does not prove the diner is physically at
//! the table.
//!
//! The canonical string is only unambiguous because the typed restaurant,
//! branch and table ids reject `:`. [`issue`] and [`verify`] take raw text
//! and do not re-check that, so `("a:b", "c")` and `("a", "b:c")` would
//! share a proof there. Such a proof still fails later when the id is
//! parsed.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::domain::foundation::{BranchId, RestaurantId, TableId, COORDINATE_DELIMITER};

/// Number of base64url characters kept from the digest.
pub const PROOF_LENGTH: usize = 16;

/// Delimiter joining the coordinates in the canonical string.
const DELIMITER: char = COORDINATE_DELIMITER;

/// Short capability proof printed in a table's QR URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrProof(String);

impl QrProof {
    /// Returns the proof text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QrProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the proof for a set of table coordinates.
///
/// Deterministic: identical inputs always produce the identical proof. The
/// table number is hashed as-is, without range checks.
pub fn issue(restaurant_id: &str, branch_id: &str, table_id: &str, table_number: i64) -> QrProof {
    let canonical = format!(
        "{restaurant_id}{DELIMITER}{branch_id}{DELIMITER}{table_id}{DELIMITER}{table_number}"
    );
    let digest = Sha256::digest(canonical.as_bytes());
    let mut encoded = URL_SAFE.encode(digest);
    encoded.truncate(PROOF_LENGTH);
    QrProof(encoded)
}

/// Checks a presented proof against the claimed coordinates.
///
/// Never fails: blank coordinates or a proof of the wrong length simply
/// return `false`. The comparison runs in constant time.
pub fn verify(
    restaurant_id: &str,
    branch_id: &str,
    table_id: &str,
    table_number: i64,
    presented: &str,
) -> bool {
    if [restaurant_id, branch_id, table_id]
        .iter()
        .any(|coordinate| coordinate.trim().is_empty())
    {
        return false;
    }
    if presented.len() != PROOF_LENGTH {
        return false;
    }

    let expected = issue(restaurant_id, branch_id, table_id, table_number);
    expected.0.as_bytes().ct_eq(presented.as_bytes()).into()
}

/// The four values a table QR code binds together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCoordinates {
    pub restaurant_id: RestaurantId,
    pub branch_id: BranchId,
    pub table_id: TableId,
    pub table_number: u32,
}

impl TableCoordinates {
    /// Derives the proof for these coordinates.
    pub fn proof(&self) -> QrProof {
        issue(
            self.restaurant_id.as_str(),
            self.branch_id.as_str(),
            self.table_id.as_str(),
            i64::from(self.table_number),
        )
    }

    /// Builds the diner-facing URL encoded into the printed QR code.
    ///
    /// Format: `{base}/request?r={restaurant}&b={branch}&t={table}&n={number}&h={proof}`
    pub fn qr_url(&self, base_url: &str) -> String {
        format!(
            "{}/request?r={}&b={}&t={}&n={}&h={}",
            base_url.trim_end_matches('/'),
            self.restaurant_id,
            self.branch_id,
            self.table_id,
            self.table_number,
            self.proof(),
        )
    }
}
