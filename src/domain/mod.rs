//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `restaurant` - Restaurants (tenants) and their branches
//! - `table` - Tables and the QR capability proof printed on them
//! - `request` - Service requests raised by diners

pub mod foundation;
pub mod request;
pub mod restaurant;
pub mod table;
