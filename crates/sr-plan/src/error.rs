//! Planner error type.
//!
//! Only genuine failures live here.  A disconnected graph is an expected
//! outcome reported through [`crate::Caution::NoRouteAvailable`], never an
//! error.

use thiserror::Error;

use sr_core::{CoreError, GeoPoint};

/// Errors produced by `sr-plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Invalid coordinate or invalid configuration.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The point could not be snapped to any road node — empty network, or
    /// the nearest node lies beyond the configured snap bound.
    #[error("cannot resolve {0} to a road node")]
    UnresolvableLocation(GeoPoint),
}
