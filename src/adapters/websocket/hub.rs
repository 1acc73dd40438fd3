//! Notification hub: connection registry and broadcast router.
//!
//! Live dashboard connections are grouped by restaurant. Publishing an
//! event for a restaurant serializes it once and enqueues the text on the
//! bounded outbound buffer of every connection in that group.
//!
//! # Architecture
//!
//! ```text
//! Group: rest-1          Group: rest-2
//! ├── conn-a ─▶ [buf]    └── conn-d ─▶ [buf]
//! ├── conn-b ─▶ [buf]
//! └── conn-c ─▶ [buf]
//! ```
//!
//! A connection whose buffer is full (slow consumer) or closed (writer
//! gone) is evicted during publish. Eviction drops the registry's sender,
//! which closes the buffer; the connection's writer drains what is left and
//! then closes the socket.
//!
//! # Thread Safety
//!
//! One `std::sync::RwLock` guards the whole map. Publishing holds the read
//! lock while enqueueing with `try_send`, so it never waits on a subscriber
//! and never awaits. Joins, leaves and evictions take the write lock. The
//! lock is never held across an `.await` and never nested. A poisoned lock
//! is recovered rather than propagated.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::mpsc::{self, error::TrySendError};

use crate::domain::foundation::{ConnectionId, RestaurantId};
use crate::ports::{BroadcastMessage, NotificationPublisher};

use super::messages::ServerMessage;

/// Default capacity of each connection's outbound buffer.
pub const DEFAULT_OUTBOUND_CAPACITY: usize = 256;

/// Serialized frame shared by every recipient of one publish.
pub type Frame = Arc<str>;

/// A live push connection, owned by the hub once joined.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    restaurant_id: RestaurantId,
    outbound: mpsc::Sender<Frame>,
}

impl Connection {
    /// The non-owning handle used by transport loops for cleanup.
    pub fn handle(&self) -> ConnectionHandle {
        ConnectionHandle {
            id: self.id,
            restaurant_id: self.restaurant_id.clone(),
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    /// Enqueue a frame on this connection before it is joined.
    ///
    /// Returns false when the buffer is full or closed.
    pub fn try_enqueue(&self, frame: Frame) -> bool {
        self.outbound.try_send(frame).is_ok()
    }
}

/// Identity of a connection: enough to leave, nothing to send with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionHandle {
    pub id: ConnectionId,
    pub restaurant_id: RestaurantId,
}

type Group = HashMap<ConnectionId, mpsc::Sender<Frame>>;

/// Registry of live connections plus the router that fans events out.
pub struct NotificationHub {
    groups: RwLock<HashMap<RestaurantId, Group>>,
    outbound_capacity: usize,
}

impl NotificationHub {
    /// Create a hub whose connections buffer up to `outbound_capacity`
    /// frames (at least one).
    pub fn new(outbound_capacity: usize) -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            outbound_capacity: outbound_capacity.max(1),
        }
    }

    /// Create with the default capacity (256 frames).
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_OUTBOUND_CAPACITY)
    }

    pub fn outbound_capacity(&self) -> usize {
        self.outbound_capacity
    }

    /// Allocate a connection for `restaurant_id` and the receiving end of
    /// its outbound buffer. The connection is not registered until
    /// [`join`](Self::join).
    pub fn open(&self, restaurant_id: RestaurantId) -> (Connection, mpsc::Receiver<Frame>) {
        let (outbound, receiver) = mpsc::channel(self.outbound_capacity);
        let connection = Connection {
            id: ConnectionId::new(),
            restaurant_id,
            outbound,
        };
        (connection, receiver)
    }

    /// Register a connection under its restaurant, creating the group if
    /// needed. Joining an id that is already present replaces it.
    pub fn join(&self, connection: Connection) -> ConnectionHandle {
        let handle = connection.handle();
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        groups
            .entry(connection.restaurant_id)
            .or_default()
            .insert(connection.id, connection.outbound);

        tracing::info!(
            restaurant_id = %handle.restaurant_id,
            connection_id = %handle.id,
            "Dashboard connection joined"
        );
        handle
    }

    /// Remove a connection. Drops the group when it becomes empty.
    ///
    /// Returns false if the connection was not registered (already left or
    /// evicted); that case is a no-op.
    pub fn leave(&self, handle: &ConnectionHandle) -> bool {
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        let Some(group) = groups.get_mut(&handle.restaurant_id) else {
            return false;
        };
        let removed = group.remove(&handle.id).is_some();
        if group.is_empty() {
            groups.remove(&handle.restaurant_id);
        }
        drop(groups);

        if removed {
            tracing::info!(
                restaurant_id = %handle.restaurant_id,
                connection_id = %handle.id,
                "Dashboard connection left"
            );
        }
        removed
    }

    /// Number of live connections for a restaurant (0 if none).
    pub fn count_subscribers(&self, restaurant_id: &RestaurantId) -> usize {
        self.groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(restaurant_id)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    /// Restaurants with at least one live connection.
    pub fn active_restaurants(&self) -> Vec<RestaurantId> {
        self.groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Live connections across all restaurants.
    pub fn total_connections(&self) -> usize {
        self.groups
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(HashMap::len)
            .sum()
    }

    /// Serialize `message` and deliver it to every connection of
    /// `restaurant_id`.
    ///
    /// Returns the number of connections the frame was enqueued for. A
    /// serialization failure is logged and nothing is sent.
    pub fn broadcast(&self, restaurant_id: &RestaurantId, message: &ServerMessage) -> usize {
        match message.to_json() {
            Ok(json) => self.deliver(restaurant_id, Frame::from(json)),
            Err(e) => {
                tracing::error!(
                    restaurant_id = %restaurant_id,
                    error = %e,
                    "Failed to serialize dashboard message"
                );
                0
            }
        }
    }

    /// Enqueue an already serialized frame for every connection of
    /// `restaurant_id`, evicting connections that cannot accept it.
    pub fn deliver(&self, restaurant_id: &RestaurantId, frame: Frame) -> usize {
        let mut delivered = 0;
        let mut evicted = Vec::new();

        {
            let groups = self.groups.read().unwrap_or_else(PoisonError::into_inner);
            let Some(group) = groups.get(restaurant_id) else {
                tracing::debug!(restaurant_id = %restaurant_id, "No dashboards connected");
                return 0;
            };

            for (connection_id, outbound) in group {
                match outbound.try_send(Arc::clone(&frame)) {
                    Ok(()) => delivered += 1,
                    Err(TrySendError::Full(_)) => {
                        tracing::warn!(
                            restaurant_id = %restaurant_id,
                            connection_id = %connection_id,
                            "Outbound buffer full, evicting slow connection"
                        );
                        evicted.push(*connection_id);
                    }
                    Err(TrySendError::Closed(_)) => {
                        tracing::debug!(
                            restaurant_id = %restaurant_id,
                            connection_id = %connection_id,
                            "Outbound buffer closed, evicting connection"
                        );
                        evicted.push(*connection_id);
                    }
                }
            }
        }

        if !evicted.is_empty() {
            self.evict(restaurant_id, &evicted);
        }

        tracing::debug!(
            restaurant_id = %restaurant_id,
            delivered,
            evicted = evicted.len(),
            "Broadcast dashboard message"
        );
        delivered
    }

    fn evict(&self, restaurant_id: &RestaurantId, connection_ids: &[ConnectionId]) {
        let mut groups = self.groups.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(group) = groups.get_mut(restaurant_id) {
            for connection_id in connection_ids {
                group.remove(connection_id);
            }
            if group.is_empty() {
                groups.remove(restaurant_id);
            }
        }
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl NotificationPublisher for NotificationHub {
    fn publish(&self, message: BroadcastMessage) {
        let BroadcastMessage {
            restaurant_id,
            event,
        } = message;
        self.broadcast(&restaurant_id, &ServerMessage::from(event));
    }
}
