//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter (dto, handlers, routes); [`router`]
//! assembles them behind the shared middleware.

pub mod error;
pub mod middleware;
pub mod request;
pub mod restaurant;
pub mod router;
pub mod table;

pub use error::ErrorResponse;
pub use request::RequestHandlers;
pub use restaurant::{BranchHandlers, RestaurantHandlers};
pub use router::{api_router, ApiState, RouterSettings};
pub use table::TableHandlers;
