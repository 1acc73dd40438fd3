//! WebSocket message types for live restaurant dashboards.
//!
//! Server → client only. Every frame is a JSON text frame tagged with
//! `type`. Inbound application messages are ignored by the server.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConnectionId, RestaurantId, Timestamp};
use crate::domain::request::{RequestStatus, ServiceRequest};
use crate::ports::NotificationEvent;

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Connection established and joined to the restaurant group.
    #[serde(rename = "connected")]
    Connected(ConnectedMessage),

    /// A diner raised a new service request.
    #[serde(rename = "request.created")]
    RequestCreated(RequestCreatedMessage),
}

impl ServerMessage {
    /// Greeting sent as the first frame of every connection.
    pub fn connected(restaurant_id: &RestaurantId, connection_id: &ConnectionId) -> Self {
        ServerMessage::Connected(ConnectedMessage {
            restaurant_id: restaurant_id.to_string(),
            connection_id: connection_id.to_string(),
            timestamp: Timestamp::now().to_rfc3339(),
        })
    }

    /// Serializes into the text payload of a frame.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<NotificationEvent> for ServerMessage {
    fn from(event: NotificationEvent) -> Self {
        match event {
            NotificationEvent::RequestCreated(request) => {
                ServerMessage::RequestCreated(RequestCreatedMessage {
                    request: RequestPayload::from(&request),
                })
            }
        }
    }
}

/// Sent when a client successfully connects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub restaurant_id: String,
    pub connection_id: String,
    pub timestamp: String,
}

/// Body of a `request.created` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestCreatedMessage {
    pub request: RequestPayload,
}

/// Wire view of a service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub id: String,
    pub restaurant_id: String,
    pub branch_id: String,
    pub table_id: String,
    pub table_number: u32,
    pub status: RequestStatus,
    pub created_at: String,
}

impl From<&ServiceRequest> for RequestPayload {
    fn from(request: &ServiceRequest) -> Self {
        Self {
            id: request.id().to_string(),
            restaurant_id: request.restaurant_id().to_string(),
            branch_id: request.branch_id().to_string(),
            table_id: request.table_id().to_string(),
            table_number: request.table_number(),
            status: request.status(),
            created_at: request.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BranchId, TableId};

    fn request() -> ServiceRequest {
        ServiceRequest::new(
            RestaurantId::new("rest-1").unwrap(),
            BranchId::new("branch-1").unwrap(),
            TableId::new("table-9").unwrap(),
            9,
        )
    }

    #[test]
    fn connected_message_uses_camel_case_fields() {
        let restaurant_id = RestaurantId::new("rest-1").unwrap();
        let connection_id = ConnectionId::new();

        let json = ServerMessage::connected(&restaurant_id, &connection_id)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "connected");
        assert_eq!(value["restaurantId"], "rest-1");
        assert_eq!(value["connectionId"], connection_id.to_string());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn request_created_message_nests_request() {
        let request = request();
        let message = ServerMessage::from(NotificationEvent::RequestCreated(request.clone()));

        let value: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();

        assert_eq!(value["type"], "request.created");
        assert_eq!(value["request"]["id"], request.id().to_string());
        assert_eq!(value["request"]["restaurantId"], "rest-1");
        assert_eq!(value["request"]["branchId"], "branch-1");
        assert_eq!(value["request"]["tableId"], "table-9");
        assert_eq!(value["request"]["tableNumber"], 9);
        assert_eq!(value["request"]["status"], "pending");
        assert!(value["request"]["createdAt"].is_string());
    }

    #[test]
    fn server_message_parses_back_from_wire() {
        let message = ServerMessage::from(NotificationEvent::RequestCreated(request()));
        let parsed: ServerMessage = serde_json::from_str(&message.to_json().unwrap()).unwrap();
        assert_eq!(parsed, message);
    }
}
