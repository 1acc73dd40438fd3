//! NotificationPublisher port - fan-out of events to live dashboards.
//!
//! Workflows hand a [`BroadcastMessage`] to the publisher after the state
//! change it describes has been persisted. Delivery is best-effort: no
//! retry, no persistence, no acknowledgment. A restaurant with no connected
//! dashboard simply drops the event.

use crate::domain::foundation::RestaurantId;
use crate::domain::request::ServiceRequest;

/// Event pushed to the dashboards of one restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A diner raised a new service request.
    RequestCreated(ServiceRequest),
}

/// An event addressed to every live connection of a restaurant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastMessage {
    pub restaurant_id: RestaurantId,
    pub event: NotificationEvent,
}

impl BroadcastMessage {
    /// Announces a freshly persisted request to its restaurant.
    pub fn request_created(request: &ServiceRequest) -> Self {
        Self {
            restaurant_id: request.restaurant_id().clone(),
            event: NotificationEvent::RequestCreated(request.clone()),
        }
    }
}

/// Port for publishing dashboard notifications.
///
/// Implementations must not block the caller on slow subscribers and must
/// never fail the calling workflow: delivery problems are handled (and
/// logged) inside the adapter.
pub trait NotificationPublisher: Send + Sync {
    /// Enqueue `message` for every live connection of its restaurant.
    fn publish(&self, message: BroadcastMessage);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BranchId, TableId};

    #[test]
    fn notification_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn NotificationPublisher) {}
    }

    #[test]
    fn request_created_targets_request_restaurant() {
        let request = ServiceRequest::new(
            RestaurantId::new("rest-1").unwrap(),
            BranchId::new("branch-1").unwrap(),
            TableId::new("table-9").unwrap(),
            9,
        );

        let message = BroadcastMessage::request_created(&request);

        assert_eq!(message.restaurant_id.as_str(), "rest-1");
        assert_eq!(message.event, NotificationEvent::RequestCreated(request));
    }
}
