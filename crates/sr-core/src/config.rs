//! Planner configuration.

use crate::error::{CoreError, CoreResult};

/// Tuning constants shared by every component of one planning request.
///
/// All zones in a request share the same `risk_radius_deg`; the penalty
/// factors define the weight tiers (see `sr-spatial`'s `PenaltyTier`).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Risk-proximity threshold in raw degrees (planar metric) or metres
    /// (haversine metric).  Default 0.002° ≈ 220 m at the equator.
    pub risk_radius_deg: f32,

    /// Multiplier applied to the base length of an edge near a risk zone
    /// on the first search.
    pub penalty_factor: f32,

    /// Additional multiplier applied on top of `penalty_factor` when the
    /// primary path still crosses a risk zone and an alternate is searched.
    pub escalation_factor: f32,

    /// Maximum distance in metres a query point may lie from its snapped
    /// node.  `None` accepts the nearest node unconditionally.
    pub max_snap_distance_m: Option<f32>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            risk_radius_deg: 0.002,
            penalty_factor: 5.0,
            escalation_factor: 10.0,
            max_snap_distance_m: None,
        }
    }
}

impl PlannerConfig {
    /// Reject configurations that would break weight positivity or the
    /// penalty-tier ordering (escalated ≥ penalized ≥ base).
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.risk_radius_deg.is_finite() && self.risk_radius_deg > 0.0) {
            return Err(CoreError::Config(format!(
                "risk_radius_deg must be positive, got {}",
                self.risk_radius_deg
            )));
        }
        if !(self.penalty_factor.is_finite() && self.penalty_factor >= 1.0) {
            return Err(CoreError::Config(format!(
                "penalty_factor must be >= 1, got {}",
                self.penalty_factor
            )));
        }
        if !(self.escalation_factor.is_finite() && self.escalation_factor >= 1.0) {
            return Err(CoreError::Config(format!(
                "escalation_factor must be >= 1, got {}",
                self.escalation_factor
            )));
        }
        if let Some(d) = self.max_snap_distance_m {
            if !(d.is_finite() && d > 0.0) {
                return Err(CoreError::Config(format!(
                    "max_snap_distance_m must be positive, got {d}"
                )));
            }
        }
        Ok(())
    }
}
