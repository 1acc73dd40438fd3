//! In-memory repository adapters.
//!
//! Back the application with process-local maps. Used by tests and by
//! local development runs without a database.

mod branch_repository;
mod request_repository;
mod restaurant_repository;
mod table_repository;

pub use branch_repository::InMemoryBranchRepository;
pub use request_repository::InMemoryRequestRepository;
pub use restaurant_repository::InMemoryRestaurantRepository;
pub use table_repository::InMemoryTableRepository;
