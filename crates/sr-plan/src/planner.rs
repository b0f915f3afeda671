//! The route safety evaluator.

use sr_core::{GeoPoint, NodeId, PlannerConfig};
use sr_spatial::{
    DijkstraPathFinder, PathFinder, PenaltyTier, RiskZoneSet, RoadNetwork, SpatialError,
    WeightView,
};

use crate::error::PlanError;
use crate::result::{Caution, PlanResult};

/// Risk-aware route planner.
///
/// Holds only configuration and a path-finder instance; all per-request
/// state (risk snapshot, weight views) is local to [`plan`](Self::plan),
/// so one `Planner` can serve concurrent requests over a shared
/// `&RoadNetwork` without synchronization.
pub struct Planner<F: PathFinder = DijkstraPathFinder> {
    config: PlannerConfig,
    finder: F,
}

impl Planner {
    /// Create a planner with the default Dijkstra path finder.
    ///
    /// Fails with a configuration error if `config` would break weight
    /// positivity or the penalty-tier ordering.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        Self::with_finder(config, DijkstraPathFinder)
    }
}

impl<F: PathFinder> Planner<F> {
    /// Create a planner with a custom [`PathFinder`] implementation.
    pub fn with_finder(config: PlannerConfig, finder: F) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config, finder })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route from `origin` to `destination` avoiding the supplied
    /// risk coordinates where possible.
    ///
    /// The first search already penalizes risk-adjacent edges; if the
    /// resulting path still passes near a zone, a second search under
    /// escalated weights produces the alternate.  See [`Caution`] for the
    /// four possible outcomes.
    ///
    /// # Errors
    ///
    /// - `InvalidCoordinate` — `origin` or `destination` is NaN or outside
    ///   valid geographic range.
    /// - `UnresolvableLocation` — a point cannot be snapped to a road node.
    ///
    /// A disconnected graph is **not** an error; it yields
    /// [`Caution::NoRouteAvailable`].
    pub fn plan(
        &self,
        network: &RoadNetwork,
        origin: GeoPoint,
        destination: GeoPoint,
        risk_coords: &[GeoPoint],
    ) -> Result<PlanResult, PlanError> {
        origin.check()?;
        destination.check()?;

        let orig_node = self.resolve(network, origin)?;
        let dest_node = self.resolve(network, destination)?;
        tracing::debug!(%origin, %destination, %orig_node, %dest_node, "endpoints resolved");

        // Request-owned snapshot; never shared across requests.
        let zones = RiskZoneSet::new(risk_coords.to_vec(), self.config.risk_radius_deg);

        let view = WeightView::assign(network, &zones, PenaltyTier::Penalized, &self.config);
        let primary = match self.finder.shortest_path(network, &view, orig_node, dest_node) {
            Ok(path) => path,
            Err(SpatialError::NoRoute { .. }) => {
                // Expected business outcome, not a fault.
                tracing::debug!(%orig_node, %dest_node, "endpoints not connected");
                return Ok(PlanResult {
                    primary: None,
                    alternate: None,
                    caution: Caution::NoRouteAvailable,
                });
            }
        };

        let primary_coords = primary.coords(network);
        let risk_on_path = primary_coords.iter().any(|&p| zones.near_any(p));
        if !risk_on_path {
            return Ok(PlanResult {
                primary: Some(primary_coords),
                alternate: None,
                caution: Caution::None,
            });
        }

        tracing::info!(
            zones = zones.len(),
            cost = primary.total_cost,
            "risk zone on primary path, searching escalated alternate"
        );
        let escalated = WeightView::assign(network, &zones, PenaltyTier::Escalated, &self.config);
        match self.finder.shortest_path(network, &escalated, orig_node, dest_node) {
            Ok(alternate) => Ok(PlanResult {
                primary: Some(primary_coords),
                alternate: Some(alternate.coords(network)),
                caution: Caution::AlternateSuggested,
            }),
            Err(SpatialError::NoRoute { .. }) => {
                tracing::debug!("no route under escalated weights");
                Ok(PlanResult {
                    primary: Some(primary_coords),
                    alternate: None,
                    caution: Caution::NoAlternateAvailable,
                })
            }
        }
    }

    /// Snap `point` to its nearest road node, honoring the configured
    /// maximum snap distance.
    fn resolve(&self, network: &RoadNetwork, point: GeoPoint) -> Result<NodeId, PlanError> {
        let node = network
            .snap_to_node(point)
            .ok_or(PlanError::UnresolvableLocation(point))?;
        if let Some(max_m) = self.config.max_snap_distance_m {
            if network.node_pos[node.index()].distance_m(point) > max_m {
                return Err(PlanError::UnresolvableLocation(point));
            }
        }
        Ok(node)
    }
}
