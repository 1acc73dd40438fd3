//! HTTP routes for restaurant and branch endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_branch, create_restaurant, delete_branch, delete_restaurant, get_branch,
    get_restaurant, list_branches, list_restaurants, setup_restaurant, update_branch,
    update_restaurant, BranchHandlers, RestaurantHandlers,
};

/// Nested under `/api/v1/restaurants`.
pub fn restaurant_routes(handlers: RestaurantHandlers) -> Router {
    Router::new()
        .route("/", post(create_restaurant).get(list_restaurants))
        .route("/setup", post(setup_restaurant))
        .route(
            "/:id",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
        .with_state(handlers)
}

/// Nested under `/api/v1/branches`.
pub fn branch_routes(handlers: BranchHandlers) -> Router {
    Router::new()
        .route("/", post(create_branch))
        .route("/restaurant/:restaurant_id", get(list_branches))
        .route(
            "/:id",
            get(get_branch).put(update_branch).delete(delete_branch),
        )
        .with_state(handlers)
}
