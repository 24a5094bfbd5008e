//! # Wearable Manager
//!
//! Aggregates any number of [`WearablePlatform`] back-ends behind one
//! surface. Every node id the manager hands out is prefixed with the tag
//! of the platform that produced it, and every call taking a node id is
//! routed back to that platform by splitting the tag off again.
//!
//! The manager holds no mutable state after construction, so a single
//! instance can be shared and called from any number of tasks without
//! locking.

use bytes::Bytes;
use futures::future::{self, BoxFuture};
use futures::stream::{self, BoxStream, StreamExt};
use platform_traits::{
    ByteSink, ByteSource, ConnectionState, PlatformError, ReceivedMessage, WearableNode,
    WearablePlatform,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::builder::WearableManagerBuilder;
use crate::error::{ManagerError, Result};
use crate::routing;

/// A platform together with the tag it was registered under.
///
/// The tag is captured from [`WearablePlatform::platform_id`] once at
/// build time and never re-queried.
pub(crate) struct RegisteredPlatform {
    pub(crate) tag: String,
    pub(crate) platform: Arc<dyn WearablePlatform>,
}

/// Routes wearable operations across the registered platforms.
///
/// Built via [`WearableManagerBuilder`]; the platform registry is fixed
/// for the lifetime of the manager.
///
/// # Examples
///
/// ```rust,ignore
/// use core_manager::WearableManager;
///
/// let manager = WearableManager::builder()
///     .add_platform(wear_os_platform)
///     .add_platform(fitbit_platform)
///     .build()?;
///
/// for node in manager.nodes().await? {
///     manager.send_message(&node.node_id, "/ping", None).await?;
/// }
/// ```
pub struct WearableManager {
    platforms: Vec<RegisteredPlatform>,
}

impl WearableManager {
    pub(crate) fn new(platforms: Vec<RegisteredPlatform>) -> Self {
        Self { platforms }
    }

    /// Creates a builder for a new manager.
    pub fn builder() -> WearableManagerBuilder {
        WearableManagerBuilder::new()
    }

    /// Retrieves all nodes found across all platforms, each with its id
    /// tagged by the platform of origin.
    ///
    /// Platforms are queried concurrently and the results concatenated;
    /// no ordering is guaranteed across platforms.
    ///
    /// # Errors
    ///
    /// Fails with the first platform error encountered. A partial result
    /// is never returned; dropping the call cancels the remaining
    /// queries.
    pub async fn nodes(&self) -> Result<Vec<WearableNode>> {
        let queries = self.platforms.iter().map(|entry| async move {
            let nodes = entry.platform.nodes().await?;
            Ok::<Vec<WearableNode>, PlatformError>(
                nodes
                    .into_iter()
                    .map(|node| WearableNode {
                        node_id: routing::join_node_id(&entry.tag, &node.node_id),
                        display_name: node.display_name,
                    })
                    .collect(),
            )
        });

        let per_platform = future::try_join_all(queries).await?;
        let nodes: Vec<WearableNode> = per_platform.into_iter().flatten().collect();
        debug!(count = nodes.len(), "enumerated wearable nodes");
        Ok(nodes)
    }

    /// Sends a message to the node with the given tagged ID.
    ///
    /// Returns the platform's own result unchanged: `true` means the
    /// local send succeeded, and does *not* guarantee delivery.
    ///
    /// # Errors
    ///
    /// Fails without touching any platform when `node_id` carries no tag
    /// or its tag matches no registered platform.
    pub async fn send_message(
        &self,
        node_id: &str,
        path: &str,
        payload: Option<Bytes>,
    ) -> Result<bool> {
        let (entry, native_id) = self.route(node_id)?;
        Ok(entry.platform.send_message(native_id, path, payload).await)
    }

    /// A live stream of messages received from all platforms, each
    /// message's source id tagged by its platform of origin.
    ///
    /// Per-platform ordering is preserved within that platform's
    /// contribution; no ordering is guaranteed across platforms. The
    /// merged stream ends only once every platform's stream has ended.
    pub fn received_messages(&self) -> BoxStream<'static, ReceivedMessage> {
        let tagged = self
            .platforms
            .iter()
            .map(|entry| {
                let tag = entry.tag.clone();
                entry
                    .platform
                    .received_messages()
                    .map(move |message| ReceivedMessage {
                        source_node_id: routing::join_node_id(&tag, &message.source_node_id),
                        ..message
                    })
                    .boxed()
            })
            .collect::<Vec<_>>();

        stream::select_all(tagged).boxed()
    }

    /// Opens a byte channel for sending data to the node with the given
    /// tagged ID.
    ///
    /// `body` runs against the write half; the channel is closed by the
    /// owning platform on every exit path, including cancellation.
    pub async fn send_data<F>(&self, node_id: &str, path: &str, body: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a mut ByteSink) -> BoxFuture<'a, std::io::Result<()>>
            + Send
            + 'static,
    {
        let (entry, native_id) = self.route(node_id)?;
        entry
            .platform
            .send_data(native_id, path, Box::new(body))
            .await
            .map_err(ManagerError::from)
    }

    /// Opens a byte channel for receiving data from the node with the
    /// given tagged ID.
    ///
    /// The inbound counterpart of [`send_data`](WearableManager::send_data),
    /// with the same close guarantee.
    pub async fn receive_data<F>(&self, node_id: &str, path: &str, body: F) -> Result<()>
    where
        F: for<'a> FnOnce(&'a mut ByteSource) -> BoxFuture<'a, std::io::Result<()>>
            + Send
            + 'static,
    {
        let (entry, native_id) = self.route(node_id)?;
        entry
            .platform
            .receive_data(native_id, path, Box::new(body))
            .await
            .map_err(ManagerError::from)
    }

    /// Gets the [`ConnectionState`] for the node with the given tagged ID.
    pub async fn connection_state(&self, node_id: &str) -> Result<ConnectionState> {
        let (entry, native_id) = self.route(node_id)?;
        entry
            .platform
            .connection_state(native_id)
            .await
            .map_err(ManagerError::from)
    }

    /// Resolves a tagged node id to its registered platform and native id.
    fn route<'a>(&'a self, node_id: &'a str) -> Result<(&'a RegisteredPlatform, &'a str)> {
        let Some((tag, native_id)) = routing::split_node_id(node_id) else {
            warn!(node_id, "node id carries no platform tag");
            return Err(ManagerError::MalformedNodeId(node_id.to_string()));
        };

        let entry = self
            .platforms
            .iter()
            .find(|entry| entry.tag == tag)
            .ok_or_else(|| {
                warn!(tag, "no platform registered for tag");
                ManagerError::UnknownPlatform(tag.to_string())
            })?;

        Ok((entry, native_id))
    }

    /// Tags of the registered platforms, in registration order.
    pub fn platform_tags(&self) -> Vec<&str> {
        self.platforms.iter().map(|entry| entry.tag.as_str()).collect()
    }
}
