use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Platform backend unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Channel open failed on path {path}: {reason}")]
    ChannelOpen { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlatformError>;
