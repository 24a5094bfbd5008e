//! Builder for [`WearableManager`].
//!
//! Platforms are accumulated one at a time and validated together at
//! [`build`](WearableManagerBuilder::build) time. Validation is the
//! answer to tag collisions: two platforms reporting the same
//! [`platform_id`](platform_traits::WearablePlatform::platform_id) would
//! be indistinguishable when a tagged node id is routed back, so the
//! builder rejects the configuration outright instead of letting the
//! first registration shadow the second.

use platform_traits::WearablePlatform;
use std::sync::Arc;

use crate::error::BuilderError;
use crate::manager::{RegisteredPlatform, WearableManager};
use crate::routing::PLATFORM_SEPARATOR;

/// Accumulates platforms for a new [`WearableManager`].
#[derive(Default)]
pub struct WearableManagerBuilder {
    platforms: Vec<Arc<dyn WearablePlatform>>,
}

impl WearableManagerBuilder {
    pub fn new() -> Self {
        Self {
            platforms: Vec::new(),
        }
    }

    /// Adds a platform to the manager being built.
    pub fn add_platform(self, platform: impl WearablePlatform + 'static) -> Self {
        self.add_shared_platform(Arc::new(platform))
    }

    /// Adds an already-shared platform to the manager being built.
    pub fn add_shared_platform(mut self, platform: Arc<dyn WearablePlatform>) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Builds the manager, capturing each platform's tag.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::NoPlatforms`] when nothing was registered.
    /// - [`BuilderError::InvalidTag`] when a platform reports an empty
    ///   tag or one containing the id separator.
    /// - [`BuilderError::DuplicateTag`] when two platforms report the
    ///   same tag.
    pub fn build(self) -> Result<WearableManager, BuilderError> {
        if self.platforms.is_empty() {
            return Err(BuilderError::NoPlatforms);
        }

        let mut registered: Vec<RegisteredPlatform> = Vec::with_capacity(self.platforms.len());
        for platform in self.platforms {
            let tag = platform.platform_id().to_string();
            if tag.is_empty() || tag.contains(PLATFORM_SEPARATOR) {
                return Err(BuilderError::InvalidTag(tag));
            }
            if registered.iter().any(|entry| entry.tag == tag) {
                return Err(BuilderError::DuplicateTag(tag));
            }
            registered.push(RegisteredPlatform { tag, platform });
        }

        Ok(WearableManager::new(registered))
    }
}
