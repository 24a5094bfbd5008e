//! # Companion Handle
//!
//! The device-side view of a pairing, where exactly one peer matters:
//! a watch talking to the phone it is paired with. The handle wraps a
//! single platform, resolves "the connected device" on demand, and
//! leaves node ids native; no routing tags are involved on this
//! surface.

use bytes::Bytes;
use futures::future::{self, BoxFuture};
use futures::stream::{self, BoxStream, StreamExt};
use futures::FutureExt;
use platform_traits::{
    ByteSink, ByteSource, ConnectionState, ReceivedMessage, WearableNode, WearablePlatform,
};
use std::sync::Arc;
use tracing::warn;

use crate::error::{ManagerError, Result};

/// Talks to the single device paired through one platform.
///
/// The connected device is resolved per call: the first reachable node,
/// falling back to the first known node when none currently report as
/// reachable.
pub struct CompanionHandle {
    platform: Arc<dyn WearablePlatform>,
}

impl CompanionHandle {
    pub fn new(platform: impl WearablePlatform + 'static) -> Self {
        Self::from_shared(Arc::new(platform))
    }

    pub fn from_shared(platform: Arc<dyn WearablePlatform>) -> Self {
        Self { platform }
    }

    /// The device this handle is currently talking to.
    ///
    /// # Errors
    ///
    /// [`ManagerError::NoConnectedDevice`] when the platform reports no
    /// nodes at all; platform failures pass through unchanged.
    pub async fn connected_device(&self) -> Result<WearableNode> {
        resolve_connected(self.platform.as_ref()).await
    }

    /// Sends a message to the connected device.
    ///
    /// Best-effort like every message send: failure to resolve a device
    /// degrades to `false` rather than an error.
    pub async fn send_message(&self, path: &str, payload: Option<Bytes>) -> bool {
        match self.connected_device().await {
            Ok(device) => {
                self.platform
                    .send_message(&device.node_id, path, payload)
                    .await
            }
            Err(error) => {
                warn!(%error, "message dropped, no connected device");
                false
            }
        }
    }

    /// Messages received from the connected device.
    ///
    /// Messages from any other node on the platform are filtered out.
    /// The platform stream is subscribed immediately; messages arriving
    /// before the first poll are buffered, not lost. The stream ends
    /// immediately when no device can be resolved at first poll.
    pub fn received_messages(&self) -> BoxStream<'static, ReceivedMessage> {
        let platform = Arc::clone(&self.platform);
        let subscription = platform.received_messages();
        async move {
            match resolve_connected(platform.as_ref()).await {
                Ok(device) => {
                    let target = device.node_id;
                    subscription
                        .filter(move |message| future::ready(message.source_node_id == target))
                        .boxed()
                }
                Err(error) => {
                    warn!(%error, "companion stream ends, no connected device");
                    stream::empty().boxed()
                }
            }
        }
        .flatten_stream()
        .boxed()
    }

    /// Opens a byte channel for sending data to the connected device.
    pub async fn send_data<F>(&self, path: &str, body: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a mut ByteSink) -> BoxFuture<'a, std::io::Result<()>>
            + Send
            + 'static,
    {
        let device = self.connected_device().await?;
        self.platform
            .send_data(&device.node_id, path, Box::new(body))
            .await
            .map_err(ManagerError::from)
    }

    /// Opens a byte channel for receiving data from the connected device.
    pub async fn receive_data<F>(&self, path: &str, body: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a mut ByteSource) -> BoxFuture<'a, std::io::Result<()>>
            + Send
            + 'static,
    {
        let device = self.connected_device().await?;
        self.platform
            .receive_data(&device.node_id, path, Box::new(body))
            .await
            .map_err(ManagerError::from)
    }
}

/// Picks the first reachable node, falling back to the first known one.
async fn resolve_connected(platform: &dyn WearablePlatform) -> Result<WearableNode> {
    let nodes = platform.nodes().await?;
    for node in &nodes {
        if let Ok(ConnectionState::Connected) = platform.connection_state(&node.node_id).await {
            return Ok(node.clone());
        }
    }
    nodes
        .into_iter()
        .next()
        .ok_or(ManagerError::NoConnectedDevice)
}
