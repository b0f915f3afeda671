//! Request-scoped edge-cost assignment.
//!
//! The reference implementation wrote penalties directly into the shared
//! graph's edge weights, which races under concurrent requests.  Here the
//! network stays immutable and each planning attempt derives its own
//! [`WeightView`] — an ephemeral cost table indexed by `EdgeId` — from the
//! base lengths, the request's [`RiskZoneSet`], and a [`PenaltyTier`].

use sr_core::{EdgeId, PlannerConfig};

use crate::network::RoadNetwork;
use crate::risk::RiskZoneSet;

/// Penalty tier for one planning attempt.
///
/// The first search runs at `Penalized`; `Escalated` is used only on retry
/// after the primary path was found to cross a risk zone, and compounds the
/// penalty (`penalty_factor × escalation_factor`, default 5 × 10 = 50).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PenaltyTier {
    /// No risk penalty; every edge costs its base length.
    Normal,
    /// Risk-adjacent edges cost `base × penalty_factor`.
    Penalized,
    /// Risk-adjacent edges cost `base × penalty_factor × escalation_factor`.
    Escalated,
}

impl PenaltyTier {
    /// Multiplier applied to the base length of a risk-adjacent edge.
    pub fn factor(self, config: &PlannerConfig) -> f32 {
        match self {
            PenaltyTier::Normal => 1.0,
            PenaltyTier::Penalized => config.penalty_factor,
            PenaltyTier::Escalated => config.penalty_factor * config.escalation_factor,
        }
    }
}

/// Effective per-edge costs for one planning attempt.
///
/// Derived data: recomputed per request (and per escalation), never
/// persisted, never shared between requests.
#[derive(Clone, Debug)]
pub struct WeightView {
    costs: Vec<f32>,
}

impl WeightView {
    /// Compute the cost table for `network` under `tier`.
    ///
    /// For each edge: if its approximate midpoint is near any risk zone the
    /// cost is `base_length × tier_factor`, otherwise the base length.
    /// Pure function of its inputs; O(E × zones).
    pub fn assign(
        network: &RoadNetwork,
        zones: &RiskZoneSet,
        tier: PenaltyTier,
        config: &PlannerConfig,
    ) -> Self {
        let factor = tier.factor(config);
        let costs = (0..network.edge_count())
            .map(|i| {
                let edge = EdgeId(i as u32);
                let base = network.edge_length_m[i];
                if zones.near_any(network.edge_midpoint(edge)) {
                    base * factor
                } else {
                    base
                }
            })
            .collect();
        Self { costs }
    }

    /// Cost of traversing `edge` under this view.
    #[inline]
    pub fn cost(&self, edge: EdgeId) -> f32 {
        self.costs[edge.index()]
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}
