//! # Wearable Platform Traits
//!
//! The contract between the routing core and platform-specific wearable
//! back-ends (Wear OS, Fitbit, an in-process loopback, ...).
//!
//! ## Overview
//!
//! A back-end binding wraps one vendor's device communication stack and
//! exposes it through [`WearablePlatform`](platform::WearablePlatform):
//! peer enumeration, fire-and-forget messaging, byte channels scoped to a
//! caller-supplied body, and point-in-time reachability. The routing core
//! is written only against this trait; any number of bindings can be
//! registered side by side as long as each reports a unique
//! [`platform_id`](platform::WearablePlatform::platform_id).
//!
//! ## Thread Safety
//!
//! All platform implementations require `Send + Sync` bounds to support
//! safe concurrent usage across async tasks.
//!
//! ## Error Handling
//!
//! Fallible operations use the [`PlatformError`](error::PlatformError)
//! type. Message sends are the deliberate exception: they are best-effort
//! and report plain `bool`, where `true` means the local send succeeded
//! and never implies delivery.

pub mod error;
pub mod platform;
pub mod types;

pub use error::{PlatformError, Result};
pub use platform::{ByteSink, ByteSource, SinkBody, SourceBody, WearablePlatform};
pub use types::{ConnectionState, ReceivedMessage, WearableNode};
