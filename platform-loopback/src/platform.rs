use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use platform_traits::{
    ByteSink, ByteSource, ConnectionState, PlatformError, ReceivedMessage, Result, SinkBody,
    SourceBody, WearableNode, WearablePlatform,
};
use std::sync::{Arc, Weak};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::config::LoopbackConfig;
use crate::endpoint::Endpoint;

/// One end of an in-process wearable pairing.
///
/// Always created in pairs; each end implements the full platform
/// contract against the other. The peer is held weakly, so dropping one
/// platform makes the survivor report `Disconnected`, enumerate no
/// nodes, and fail sends.
pub struct LoopbackPlatform {
    platform_id: String,
    channel_capacity: usize,
    local: Arc<Endpoint>,
    peer: Weak<Endpoint>,
}

impl LoopbackPlatform {
    /// Builds two cross-linked endpoints.
    pub fn pair(left: LoopbackConfig, right: LoopbackConfig) -> (Self, Self) {
        let left_endpoint = Arc::new(Endpoint::new(left.display_name));
        let right_endpoint = Arc::new(Endpoint::new(right.display_name));

        let left_platform = Self {
            platform_id: left.platform_id,
            channel_capacity: left.channel_capacity,
            local: Arc::clone(&left_endpoint),
            peer: Arc::downgrade(&right_endpoint),
        };
        let right_platform = Self {
            platform_id: right.platform_id,
            channel_capacity: right.channel_capacity,
            local: right_endpoint,
            peer: Arc::downgrade(&left_endpoint),
        };
        (left_platform, right_platform)
    }

    /// The node id this end is known by on the paired side.
    pub fn node_id(&self) -> &str {
        &self.local.node_id
    }

    fn peer(&self) -> Option<Arc<Endpoint>> {
        self.peer.upgrade()
    }

    fn peer_matching(&self, node_id: &str) -> Option<Arc<Endpoint>> {
        self.peer().filter(|peer| peer.node_id == node_id)
    }
}

#[async_trait]
impl WearablePlatform for LoopbackPlatform {
    fn platform_id(&self) -> &str {
        &self.platform_id
    }

    async fn nodes(&self) -> Result<Vec<WearableNode>> {
        Ok(self
            .peer()
            .map(|peer| {
                vec![WearableNode::new(
                    peer.node_id.clone(),
                    peer.display_name.clone(),
                )]
            })
            .unwrap_or_default())
    }

    async fn send_message(&self, node_id: &str, path: &str, payload: Option<Bytes>) -> bool {
        let Some(peer) = self.peer_matching(node_id) else {
            debug!(node_id, "message dropped, peer not reachable");
            return false;
        };
        peer.deliver(ReceivedMessage::new(
            self.local.node_id.clone(),
            path,
            payload,
        ));
        true
    }

    fn received_messages(&self) -> BoxStream<'static, ReceivedMessage> {
        self.local.subscribe().boxed()
    }

    async fn send_data(&self, node_id: &str, path: &str, body: SinkBody) -> Result<()> {
        let peer = self
            .peer_matching(node_id)
            .ok_or_else(|| PlatformError::UnknownNode(node_id.to_string()))?;

        let (near, far) = tokio::io::duplex(self.channel_capacity);
        peer.offer_channel(path, far);
        debug!(path, "opened outbound loopback channel");

        let mut sink: ByteSink = Box::pin(near);
        let result = body(&mut sink).await;
        // Close the channel whether or not the body succeeded.
        let _ = sink.shutdown().await;
        result?;
        Ok(())
    }

    async fn receive_data(&self, node_id: &str, path: &str, body: SourceBody) -> Result<()> {
        if self.peer_matching(node_id).is_none() {
            return Err(PlatformError::UnknownNode(node_id.to_string()));
        }

        let stream = self.local.next_channel(path).await.ok_or_else(|| {
            PlatformError::ChannelOpen {
                path: path.to_string(),
                reason: "endpoint torn down".to_string(),
            }
        })?;
        debug!(path, "accepted inbound loopback channel");

        let mut source: ByteSource = Box::pin(stream);
        body(&mut source).await?;
        Ok(())
    }

    async fn connection_state(&self, node_id: &str) -> Result<ConnectionState> {
        Ok(if self.peer_matching(node_id).is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        })
    }
}
