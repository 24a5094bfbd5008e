//! # Loopback Platform
//!
//! An in-process implementation of the wearable platform contract.
//!
//! ## Overview
//!
//! [`LoopbackPlatform::pair`] builds two cross-linked endpoints; each one
//! sees exactly the other as its single node. Messages sent from one end
//! surface on the other end's message stream, and byte channels rendezvous
//! per path over in-memory pipes. Dropping either platform makes the
//! survivor report its peer as disconnected.
//!
//! The pairing exists for hosts that need a same-process transport, most
//! commonly wiring a manager against something real in integration tests
//! without a vendor SDK in the loop.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use platform_loopback::{LoopbackConfig, LoopbackPlatform};
//!
//! let (phone_side, watch_side) = LoopbackPlatform::pair(
//!     LoopbackConfig::new("loopback", "Phone"),
//!     LoopbackConfig::new("loopback", "Watch"),
//! );
//! ```

mod config;
mod endpoint;
mod platform;

pub use config::LoopbackConfig;
pub use platform::LoopbackPlatform;
