//! `sr-core` — foundational types for the saferoute planner.
//!
//! This crate is a dependency of every other `sr-*` crate.  It intentionally
//! has no `sr-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`                                    |
//! | [`geo`]    | `GeoPoint`, haversine + planar degree distance        |
//! | [`config`] | `PlannerConfig` (risk radius, penalty tiers, snap)    |
//! | [`error`]  | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
