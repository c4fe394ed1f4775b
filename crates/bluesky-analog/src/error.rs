use thiserror::Error;

/// Failures reported by a [`LayerHost`](crate::LayerHost).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("out of memory for layer storage")]
    OutOfMemory,

    #[error("layer rejected: {reason}")]
    Rejected { reason: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("host failed to create layer: {0}")]
    Host(#[from] HostError),
}

pub type Result<T> = core::result::Result<T, Error>;
