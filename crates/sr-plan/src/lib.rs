//! `sr-plan` — route safety evaluator for the saferoute planner.
//!
//! # Planning flow
//!
//! ```text
//! plan(network, origin, destination, risk_coords):
//!   ① Resolve   — validate both points, snap them to road nodes.
//!   ② Snapshot  — build a request-owned RiskZoneSet from risk_coords.
//!   ③ Primary   — Dijkstra under the Penalized weight view
//!                 (risk-adjacent edges already cost 5× on the first pass).
//!   ④ Inspect   — test every primary-path coordinate against the zones.
//!   ⑤ Escalate  — on detection, reassign at the Escalated tier and
//!                 search again between the same nodes.
//! ```
//!
//! Every request derives its own weight views; the shared [`sr_spatial::RoadNetwork`]
//! is never mutated, so `plan` is safe to call concurrently without locks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sr_core::{GeoPoint, PlannerConfig};
//! use sr_plan::Planner;
//!
//! let planner = Planner::new(PlannerConfig::default())?;
//! let result = planner.plan(&network, origin, destination, &risk_coords)?;
//! match result.caution {
//!     Caution::None => render(result.primary),
//!     _ => render_with_warning(result),
//! }
//! ```

pub mod error;
pub mod planner;
pub mod result;


pub use error::PlanError;
pub use planner::Planner;
pub use result::{Caution, PlanResult};
