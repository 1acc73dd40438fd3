//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `RestaurantRepository` - Restaurants (tenants)
//! - `BranchRepository` - Branches of a restaurant
//! - `TableRepository` - Tables and their QR URLs
//! - `RequestRepository` - Service requests raised by diners
//!
//! ## Notification Port
//!
//! - `NotificationPublisher` - Best-effort fan-out to live dashboards
//!
//! ## Auth Port
//!
//! - `SessionValidator` - Bearer token validation

mod branch_repository;
mod notification_publisher;
mod request_repository;
mod restaurant_repository;
mod session_validator;
mod table_repository;

pub use branch_repository::BranchRepository;
pub use notification_publisher::{BroadcastMessage, NotificationEvent, NotificationPublisher};
pub use request_repository::RequestRepository;
pub use restaurant_repository::RestaurantRepository;
pub use session_validator::SessionValidator;
pub use table_repository::TableRepository;
