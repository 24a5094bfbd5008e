use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A wearable device (node) known to a platform.
///
/// Identity is carried by `node_id` alone; `display_name` is
/// presentational and may change between queries.
///
/// # Examples
///
/// ```
/// use platform_traits::WearableNode;
///
/// let node = WearableNode::new("3f2a", "Pixel Watch");
/// assert_eq!(node.node_id, "3f2a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WearableNode {
    /// The unique device ID, in whatever format the platform uses.
    pub node_id: String,
    /// The display name of the device.
    pub display_name: String,
}

impl WearableNode {
    pub fn new(node_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for WearableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.node_id)
    }
}

/// A message received from a [`WearableNode`].
///
/// `payload` distinguishes an absent payload (`None`) from an empty one
/// (`Some` of zero bytes); both are legal on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// The id of the node the message came from.
    pub source_node_id: String,
    /// The path the message was sent on, acting as a lightweight type tag.
    pub path: String,
    /// An optional opaque payload.
    pub payload: Option<Bytes>,
}

impl ReceivedMessage {
    pub fn new(
        source_node_id: impl Into<String>,
        path: impl Into<String>,
        payload: Option<Bytes>,
    ) -> Self {
        Self {
            source_node_id: source_node_id.into(),
            path: path.into(),
            payload,
        }
    }
}

/// Point-in-time reachability of a node.
///
/// Attached transiently to a query result, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    /// The node is connected and reachable.
    Connected,
    /// The node is not connected, and cannot be reached.
    Disconnected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Connected => write!(f, "Connected"),
            ConnectionState::Disconnected => write!(f, "Disconnected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_identity_ignores_display_name() {
        let a = WearableNode::new("1", "Left Watch");
        let b = WearableNode::new("1", "Left Watch");
        assert_eq!(a, b);
    }

    #[test]
    fn test_node_serialization() {
        let node = WearableNode::new("5", "Left");
        let json = serde_json::to_string(&node).unwrap();
        let deserialized: WearableNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, deserialized);
    }

    #[test]
    fn test_empty_and_absent_payloads_are_distinct() {
        let absent = ReceivedMessage::new("5", "ping", None);
        let empty = ReceivedMessage::new("5", "ping", Some(Bytes::new()));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_connection_state_is_connected() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(!ConnectionState::Disconnected.is_connected());
    }

    #[test]
    fn test_connection_state_display() {
        assert_eq!(format!("{}", ConnectionState::Connected), "Connected");
        assert_eq!(format!("{}", ConnectionState::Disconnected), "Disconnected");
    }
}
