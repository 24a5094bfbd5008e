//! The platform contract.
//!
//! Byte channels follow an acquire/use/release shape: the platform opens
//! the channel, hands the caller body a borrowed half, and closes the
//! channel once the body returns. Because the platform keeps ownership of
//! the half for the whole call, the close also runs when the body fails
//! or when the enclosing future is dropped mid-flight.

use async_trait::async_trait;
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::error::Result;
use crate::types::{ConnectionState, ReceivedMessage, WearableNode};

/// Write half of an open byte channel.
pub type ByteSink = Pin<Box<dyn AsyncWrite + Send>>;

/// Read half of an open byte channel.
pub type ByteSource = Pin<Box<dyn AsyncRead + Send>>;

/// Caller logic scoped to an outbound byte channel.
pub type SinkBody =
    Box<dyn for<'a> FnOnce(&'a mut ByteSink) -> BoxFuture<'a, std::io::Result<()>> + Send>;

/// Caller logic scoped to an inbound byte channel.
pub type SourceBody =
    Box<dyn for<'a> FnOnce(&'a mut ByteSource) -> BoxFuture<'a, std::io::Result<()>> + Send>;

/// A connection to a single wearable ecosystem (think Wear OS, Fitbit,
/// or the in-process loopback back-end).
///
/// Implementations wrap one vendor stack and translate its failures into
/// [`PlatformError`](crate::error::PlatformError) or, on the best-effort
/// message path, into a plain `false`.
#[async_trait]
pub trait WearablePlatform: Send + Sync {
    /// Stable identifier for this back-end, used as the routing tag for
    /// every node id it surfaces.
    ///
    /// Must be unique among the platforms registered with one manager,
    /// must be non-empty, and must not contain `'|'`; the manager builder
    /// enforces all three at construction time.
    fn platform_id(&self) -> &str;

    /// Retrieves all nodes currently known to the platform.
    ///
    /// No ordering is guaranteed. A node appears at most once per call.
    async fn nodes(&self) -> Result<Vec<WearableNode>>;

    /// Sends a message to the node with the given ID. Messages have no
    /// form of synchronization, and should not be used if reliability is
    /// a concern.
    ///
    /// Returns `true` if the message was handed to the transport
    /// successfully. A successful send does *not* guarantee delivery.
    async fn send_message(&self, node_id: &str, path: &str, payload: Option<Bytes>) -> bool;

    /// A live stream of all messages received from this platform.
    ///
    /// Safe to subscribe to any number of times; each subscriber observes
    /// every message from the point of subscription on. The stream ends
    /// only when the platform itself is torn down.
    fn received_messages(&self) -> BoxStream<'static, ReceivedMessage>;

    /// Opens a byte channel for sending data to a specific node.
    ///
    /// `body` runs against the write half of the channel; the channel is
    /// closed once `body` returns, whether it succeeded, failed, or the
    /// call was cancelled.
    async fn send_data(&self, node_id: &str, path: &str, body: SinkBody) -> Result<()>;

    /// Opens a byte channel for receiving data from a specific node.
    ///
    /// `body` runs against the read half of the channel, with the same
    /// close guarantee as [`send_data`](WearablePlatform::send_data).
    async fn receive_data(&self, node_id: &str, path: &str, body: SourceBody) -> Result<()>;

    /// Gets the [`ConnectionState`] for the node with the specified ID.
    ///
    /// Unknown node ids report [`ConnectionState::Disconnected`].
    async fn connection_state(&self, node_id: &str) -> Result<ConnectionState>;
}
