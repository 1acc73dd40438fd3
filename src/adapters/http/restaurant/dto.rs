//! Data transfer objects for restaurant and branch endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::table::TableResponse;
use crate::application::handlers::restaurant::SetupRestaurantResult;
use crate::domain::restaurant::{
    Branch, BranchUpdate, Restaurant, RestaurantDetails, RestaurantUpdate,
};
use crate::domain::table::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateRestaurantRequest> for RestaurantDetails {
    fn from(req: CreateRestaurantRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            phone: req.phone,
            description: req.description,
        }
    }
}

/// Absent fields are left unchanged. An empty description clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRestaurantRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdateRestaurantRequest> for RestaurantUpdate {
    fn from(req: UpdateRestaurantRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            phone: req.phone,
            description: req.description,
        }
    }
}

/// Restaurant, first branch and numbered tables in one call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRestaurantRequest {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub branch_address: Option<String>,
    pub table_count: u32,
    #[serde(default = "default_capacity")]
    pub table_capacity: u32,
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

impl SetupRestaurantRequest {
    pub fn details(&self) -> RestaurantDetails {
        RestaurantDetails {
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    pub restaurant_id: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<UpdateBranchRequest> for BranchUpdate {
    fn from(req: UpdateBranchRequest) -> Self {
        Self {
            address: req.address,
            description: req.description,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Restaurant> for RestaurantResponse {
    fn from(r: &Restaurant) -> Self {
        Self {
            id: r.id().to_string(),
            user_id: r.owner_id().to_string(),
            name: r.name().to_string(),
            address: r.address().to_string(),
            phone: r.phone().to_string(),
            description: r.description().map(str::to_string),
            created_at: r.created_at().to_rfc3339(),
            updated_at: r.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub id: String,
    pub restaurant_id: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Branch> for BranchResponse {
    fn from(b: &Branch) -> Self {
        Self {
            id: b.id().to_string(),
            restaurant_id: b.restaurant_id().to_string(),
            address: b.address().to_string(),
            description: b.description().map(str::to_string),
            is_active: b.is_active(),
            created_at: b.created_at().to_rfc3339(),
            updated_at: b.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupRestaurantResponse {
    pub restaurant: RestaurantResponse,
    pub branch: BranchResponse,
    pub tables: Vec<TableResponse>,
}

impl From<&SetupRestaurantResult> for SetupRestaurantResponse {
    fn from(result: &SetupRestaurantResult) -> Self {
        Self {
            restaurant: RestaurantResponse::from(&result.restaurant),
            branch: BranchResponse::from(&result.branch),
            tables: result.tables.iter().map(TableResponse::from).collect(),
        }
    }
}
