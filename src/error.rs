//! Engine error type
//!
//! These never cross the public `start/process/end/reset` boundary; the
//! session controller logs them and degrades to a no-op.

use crate::raster::TargetId;

#[derive(Debug, thiserror::Error)]
pub enum DeformError {
    #[error("raster {0:?} has no pixel data")]
    NoPixelData(TargetId),

    #[error("host has no raster for {0:?}")]
    TargetNotFound(TargetId),

    #[error("raster size changed from {expected:?} to {actual:?} during a session")]
    DimensionsChanged {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("invalid tool options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeformError>;
