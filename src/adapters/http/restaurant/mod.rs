//! HTTP adapter for restaurants and their branches.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BranchResponse, CreateBranchRequest, CreateRestaurantRequest, RestaurantResponse,
    SetupRestaurantRequest, SetupRestaurantResponse, UpdateBranchRequest,
    UpdateRestaurantRequest,
};
pub use handlers::{handle_restaurant_error, BranchHandlers, RestaurantHandlers};
pub use routes::{branch_routes, restaurant_routes};
