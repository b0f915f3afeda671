//! `sr-spatial` — road network, risk zones, weight views, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`         |
//! | [`risk`]    | `RiskZoneSet`, `ProximityMetric`                           |
//! | [`weights`] | `WeightView`, `PenaltyTier`                                |
//! | [`router`]  | `PathFinder` trait, `Path`, `DijkstraPathFinder`           |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod risk;
pub mod router;
pub mod weights;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use risk::{ProximityMetric, RiskZoneSet};
pub use router::{DijkstraPathFinder, Path, PathFinder};
pub use weights::{PenaltyTier, WeightView};
