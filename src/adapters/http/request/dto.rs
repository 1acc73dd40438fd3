//! Data transfer objects for service request endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::request::{RequestStatus, ServiceRequest};

/// Body of `POST /api/v1/public/request-account`, as encoded in the table's QR URL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequestBody {
    pub restaurant_id: String,
    pub branch_id: String,
    pub table_id: String,
    pub table_number: i64,
    pub hash: String,
}

/// Body of `PUT /api/v1/requests/:id/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    pub id: String,
    pub restaurant_id: String,
    pub branch_id: String,
    pub table_id: String,
    pub table_number: u32,
    pub status: RequestStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&ServiceRequest> for RequestResponse {
    fn from(request: &ServiceRequest) -> Self {
        Self {
            id: request.id().to_string(),
            restaurant_id: request.restaurant_id().to_string(),
            branch_id: request.branch_id().to_string(),
            table_id: request.table_id().to_string(),
            table_number: request.table_number(),
            status: request.status(),
            created_at: request.created_at().to_rfc3339(),
            updated_at: request.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestListResponse {
    pub items: Vec<RequestResponse>,
    pub total: usize,
}

impl From<Vec<ServiceRequest>> for RequestListResponse {
    fn from(requests: Vec<ServiceRequest>) -> Self {
        let items: Vec<RequestResponse> = requests.iter().map(RequestResponse::from).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_reads_qr_query_names() {
        let body: CreateServiceRequestBody = serde_json::from_str(
            r#"{"restaurantId":"r","branchId":"b","tableId":"t","tableNumber":9,"hash":"abc"}"#,
        )
        .unwrap();

        assert_eq!(body.table_number, 9);
        assert_eq!(body.hash, "abc");
    }

    #[test]
    fn create_body_accepts_negative_number_for_later_validation() {
        let body: CreateServiceRequestBody = serde_json::from_str(
            r#"{"restaurantId":"r","branchId":"b","tableId":"t","tableNumber":-1,"hash":"abc"}"#,
        )
        .unwrap();

        assert_eq!(body.table_number, -1);
    }
}
