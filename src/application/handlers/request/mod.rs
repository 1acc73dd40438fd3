//! Service request workflow handlers.

mod authorize_dashboard;
mod create_service_request;
mod delete_request;
mod get_request;
mod list_requests;
mod update_request_status;

pub use authorize_dashboard::{AuthorizeDashboardHandler, AuthorizeDashboardQuery};
pub use create_service_request::{
    CreateServiceRequestCommand, CreateServiceRequestHandler, CreateServiceRequestResult,
    DEFAULT_QUERY_TIMEOUT,
};
pub use delete_request::{DeleteRequestCommand, DeleteRequestHandler};
pub use get_request::{GetRequestHandler, GetRequestQuery};
pub use list_requests::{ListRequestsHandler, ListRequestsQuery};
pub use update_request_status::{UpdateRequestStatusCommand, UpdateRequestStatusHandler};

use crate::domain::foundation::{RestaurantId, UserId};
use crate::domain::request::RequestError;
use crate::domain::restaurant::Restaurant;
use crate::ports::RestaurantRepository;

/// Loads a restaurant and checks that `owner_id` owns it.
async fn owned_restaurant(
    restaurants: &dyn RestaurantRepository,
    restaurant_id: &RestaurantId,
    owner_id: &UserId,
) -> Result<Restaurant, RequestError> {
    let restaurant = restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| RequestError::RestaurantNotFound(restaurant_id.clone()))?;
    if !restaurant.is_owned_by(owner_id) {
        return Err(RequestError::Forbidden);
    }
    Ok(restaurant)
}
