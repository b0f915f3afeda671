//! Spatial-subsystem error type.

use thiserror::Error;

use sr_core::NodeId;

/// Errors produced by `sr-spatial`.
///
/// `NoRoute` is an expected business outcome for disconnected endpoints,
/// not a fault; callers translate it into a caution code rather than
/// logging it as an error.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
