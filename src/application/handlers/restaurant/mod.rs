//! Restaurant and branch workflow handlers.

mod create_branch;
mod create_restaurant;
mod delete_branch;
mod delete_restaurant;
mod get_branch;
mod get_restaurant;
mod list_branches;
mod list_owner_restaurants;
mod setup_restaurant;
mod update_branch;
mod update_restaurant;

pub use create_branch::{CreateBranchCommand, CreateBranchHandler};
pub use create_restaurant::{CreateRestaurantCommand, CreateRestaurantHandler};
pub use delete_branch::{DeleteBranchCommand, DeleteBranchHandler};
pub use delete_restaurant::{DeleteRestaurantCommand, DeleteRestaurantHandler};
pub use get_branch::{GetBranchHandler, GetBranchQuery};
pub use get_restaurant::{GetRestaurantHandler, GetRestaurantQuery};
pub use list_branches::{ListBranchesHandler, ListBranchesQuery};
pub use list_owner_restaurants::{ListOwnerRestaurantsHandler, ListOwnerRestaurantsQuery};
pub use setup_restaurant::{
    SetupRestaurantCommand, SetupRestaurantHandler, SetupRestaurantResult, MAX_SETUP_TABLES,
};
pub use update_branch::{UpdateBranchCommand, UpdateBranchHandler};
pub use update_restaurant::{UpdateRestaurantCommand, UpdateRestaurantHandler};

use crate::domain::foundation::{BranchId, RestaurantId, UserId};
use crate::domain::restaurant::{Branch, Restaurant, RestaurantError};
use crate::ports::{BranchRepository, RestaurantRepository};

/// Loads a restaurant and checks that `owner_id` owns it.
async fn owned_restaurant(
    restaurants: &dyn RestaurantRepository,
    restaurant_id: &RestaurantId,
    owner_id: &UserId,
) -> Result<Restaurant, RestaurantError> {
    let restaurant = restaurants
        .find_by_id(restaurant_id)
        .await?
        .ok_or_else(|| RestaurantError::not_found(restaurant_id.clone()))?;
    if !restaurant.is_owned_by(owner_id) {
        return Err(RestaurantError::Forbidden);
    }
    Ok(restaurant)
}

/// Loads a branch and checks that `owner_id` owns its restaurant.
async fn owned_branch(
    restaurants: &dyn RestaurantRepository,
    branches: &dyn BranchRepository,
    branch_id: &BranchId,
    owner_id: &UserId,
) -> Result<Branch, RestaurantError> {
    let branch = branches
        .find_by_id(branch_id)
        .await?
        .ok_or_else(|| RestaurantError::branch_not_found(branch_id.clone()))?;
    owned_restaurant(restaurants, branch.restaurant_id(), owner_id).await?;
    Ok(branch)
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixture for the branch handlers.

    use std::sync::Arc;

    use crate::adapters::memory::{InMemoryBranchRepository, InMemoryRestaurantRepository};
    use crate::domain::foundation::{BranchId, RestaurantId, UserId};
    use crate::domain::restaurant::{Branch, Restaurant, RestaurantDetails};
    use crate::ports::{BranchRepository, RestaurantRepository};

    pub struct Fixture {
        pub restaurants: Arc<InMemoryRestaurantRepository>,
        pub branches: Arc<InMemoryBranchRepository>,
        pub branch: Branch,
    }

    pub fn owner() -> UserId {
        UserId::new("owner-1").unwrap()
    }

    pub fn stranger() -> UserId {
        UserId::new("stranger").unwrap()
    }

    pub fn details() -> RestaurantDetails {
        RestaurantDetails {
            name: "La Esquina".to_string(),
            address: "Av. Corrientes 1234".to_string(),
            phone: "11 5555 0000".to_string(),
            description: None,
        }
    }

    pub async fn fixture() -> Fixture {
        let restaurants = Arc::new(InMemoryRestaurantRepository::new());
        let branches = Arc::new(InMemoryBranchRepository::new());

        let restaurant =
            Restaurant::new(RestaurantId::new("rest-1").unwrap(), owner(), details()).unwrap();
        restaurants.save(&restaurant).await.unwrap();

        let branch = Branch::new(
            BranchId::new("branch-1").unwrap(),
            RestaurantId::new("rest-1").unwrap(),
            "Centro".to_string(),
            Some("Salón principal".to_string()),
        )
        .unwrap();
        branches.save(&branch).await.unwrap();

        Fixture {
            restaurants,
            branches,
            branch,
        }
    }
}
