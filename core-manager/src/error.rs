use platform_traits::PlatformError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Node id carries no platform tag: {0}")]
    MalformedNodeId(String),

    #[error("No platform registered for tag: {0}")]
    UnknownPlatform(String),

    #[error("No connected device was found")]
    NoConnectedDevice,

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("At least one platform must be registered")]
    NoPlatforms,

    #[error("Platform tag registered twice: {0}")]
    DuplicateTag(String),

    #[error("Platform tag is empty or contains the separator: {0:?}")]
    InvalidTag(String),
}

pub type Result<T> = std::result::Result<T, ManagerError>;
