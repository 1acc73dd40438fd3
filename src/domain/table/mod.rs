//! Table module - numbered tables and their QR capability proofs.

mod errors;
pub mod qr_proof;
mod table;

pub use errors::TableError;
pub use qr_proof::{QrProof, TableCoordinates, PROOF_LENGTH};
pub use table::{Table, TableUpdate, DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
