//! # Core Manager
//!
//! Multi-platform routing for wearable communication.
//!
//! ## Overview
//!
//! A host application registers one
//! [`WearablePlatform`](platform_traits::WearablePlatform) per wearable
//! ecosystem it supports and talks to all of them through a single
//! [`WearableManager`]. The manager prefixes every node id it surfaces
//! with the originating platform's tag (`"<tag>|<native-id>"`), so a
//! later call carrying that id can be dispatched back to the right
//! platform without ambiguity. Inbound message streams from all
//! platforms are merged into one, with the same tagging applied to each
//! message's source id.
//!
//! Tagged ids are only meaningful to the manager instance that produced
//! them; they are not meant to be persisted across process runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_manager::WearableManager;
//! use futures::StreamExt;
//!
//! let manager = WearableManager::builder()
//!     .add_platform(wear_os_platform)
//!     .build()?;
//!
//! let nodes = manager.nodes().await?;
//! manager.send_message(&nodes[0].node_id, "/ping", None).await?;
//!
//! let mut messages = manager.received_messages();
//! while let Some(message) = messages.next().await {
//!     println!("{} -> {}", message.source_node_id, message.path);
//! }
//! ```
//!
//! For the device-side view of a pairing, where exactly one peer matters
//! and no tags are involved, see [`CompanionHandle`].

pub mod builder;
pub mod companion;
pub mod error;
pub mod manager;
pub mod routing;

pub use builder::WearableManagerBuilder;
pub use companion::CompanionHandle;
pub use error::{BuilderError, ManagerError, Result};
pub use manager::WearableManager;

// Re-export the contract types callers handle on this surface.
pub use platform_traits::{
    ByteSink, ByteSource, ConnectionState, PlatformError, ReceivedMessage, WearableNode,
    WearablePlatform,
};
