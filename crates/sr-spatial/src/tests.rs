//! Unit tests for sr-spatial.
//!
//! All tests use hand-crafted networks so they run without any map file.

#[cfg(test)]
mod helpers {
    use sr_core::GeoPoint;
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Build the square test network.
    ///
    /// Nodes (lat, lon):
    ///   A:(0,0)  B:(0,1)  C:(1,1)  D:(1,0)
    ///
    /// Undirected unit-length edges around the ring: A-B, B-C, C-D, D-A.
    /// Two equal-cost routes A→C exist (via B or via D) until a penalty
    /// breaks the tie.
    pub fn square_network() -> (RoadNetwork, [sr_core::NodeId; 4]) {
        let mut b = RoadNetworkBuilder::new();

        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let bb = b.add_node(GeoPoint::new(0.0, 1.0));
        let c = b.add_node(GeoPoint::new(1.0, 1.0));
        let d = b.add_node(GeoPoint::new(1.0, 0.0));

        b.add_road(a, bb, 1.0);
        b.add_road(bb, c, 1.0);
        b.add_road(c, d, 1.0);
        b.add_road(d, a, 1.0);

        (b.build(), [a, bb, c, d])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use sr_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn single_road() {
        let mut b = RoadNetworkBuilder::with_capacity(2, 2);
        let a = b.add_node(GeoPoint::new(11.016, 76.955));
        let c = b.add_node(GeoPoint::new(11.020, 76.955));
        assert_eq!(b.node_pos(a), GeoPoint::new(11.016, 76.955));
        b.add_road(a, c, 1_000.0);
        assert_eq!(b.node_count(), 2);
        assert_eq!(b.edge_count(), 2);
        let net = b.build();
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 2); // bidirectional
    }

    #[test]
    fn csr_out_edges() {
        let (net, [a, bb, c, d]) = super::helpers::square_network();

        // Every ring node has exactly two outgoing edges.
        for n in [a, bb, c, d] {
            assert_eq!(net.out_degree(n), 2);
        }

        // Every outgoing edge from a node has that node as its source.
        for e in net.out_edges(a) {
            assert_eq!(net.edge_from[e.index()], a);
        }
    }

    #[test]
    fn parallel_edges_permitted() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        // Divided road: two directed edges a→c with different lengths.
        b.add_directed_edge(a, c, 100.0);
        b.add_directed_edge(a, c, 120.0);
        let net = b.build();
        assert_eq!(net.edge_count(), 2);
        assert_eq!(net.out_degree(a), 2);
    }

    #[test]
    fn directed_only_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        // One-way a → c only
        b.add_directed_edge(a, c, 100.0);
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0); // no return edge
    }

    #[test]
    fn edge_midpoint_is_mean() {
        let (net, [a, ..]) = super::helpers::square_network();
        // First outgoing edge of A goes to B or D; its midpoint is the mean.
        let e = net.out_edges(a).next().unwrap();
        let mid = net.edge_midpoint(e);
        let to = net.node_pos[net.edge_to[e.index()].index()];
        assert_eq!(mid.lat, to.lat * 0.5);
        assert_eq!(mid.lon, to.lon * 0.5);
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use sr_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn snap_exact_position() {
        let (net, [a, ..]) = super::helpers::square_network();
        let snapped = net.snap_to_node(GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(snapped, a);
    }

    #[test]
    fn snap_nearest() {
        let (net, [a, bb, ..]) = super::helpers::square_network();
        let near_a = net.snap_to_node(GeoPoint::new(0.0, 0.4)).unwrap();
        assert_eq!(near_a, a);
        let near_b = net.snap_to_node(GeoPoint::new(0.0, 0.6)).unwrap();
        assert_eq!(near_b, bb);
    }

    #[test]
    fn snap_tie_prefers_lowest_id() {
        // Two nodes equidistant from the query; the lower NodeId must win
        // regardless of insertion order.
        let mut b = RoadNetworkBuilder::new();
        let n0 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n1 = b.add_node(GeoPoint::new(0.0, -1.0));
        let net = b.build();
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.0)), Some(n0));
        assert!(n0 < n1);
    }

    #[test]
    fn empty_network_returns_none() {
        let net = RoadNetworkBuilder::new().build();
        assert!(net.snap_to_node(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn k_nearest_order() {
        let (net, nodes) = super::helpers::square_network();
        // From just off A the nearest node is A, then B or D.
        let nearest = net.k_nearest_nodes(GeoPoint::new(0.1, 0.0), 2);
        assert_eq!(nearest[0], nodes[0]);
        assert!(nearest[1] == nodes[1] || nearest[1] == nodes[3]);
    }
}

// ── Risk zones ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod risk {
    use sr_core::GeoPoint;
    use crate::{ProximityMetric, RiskZoneSet};

    #[test]
    fn near_any_within_radius() {
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.5)], 0.002);
        assert!(zones.near_any(GeoPoint::new(0.0, 0.5005)));
        assert!(!zones.near_any(GeoPoint::new(0.0, 0.51)));
    }

    #[test]
    fn boundary_is_exclusive() {
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.0)], 0.002);
        // Exactly at the radius: strictly-less-than, so not near.
        assert!(!zones.near_any(GeoPoint::new(0.0, 0.002)));
    }

    #[test]
    fn empty_set_is_never_near() {
        let zones = RiskZoneSet::new(vec![], 0.002);
        assert!(zones.is_empty());
        assert!(!zones.near_any(GeoPoint::new(0.0, 0.0)));
    }

    #[test]
    fn any_of_multiple_zones() {
        let zones = RiskZoneSet::new(
            vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)],
            0.01,
        );
        assert_eq!(zones.len(), 2);
        assert!(zones.near_any(GeoPoint::new(1.0, 1.005)));
        assert!(!zones.near_any(GeoPoint::new(0.5, 0.5)));
    }

    #[test]
    fn haversine_metric_uses_metres() {
        let zone = GeoPoint::new(11.016, 76.955);
        let zones = RiskZoneSet::with_metric(vec![zone], 250.0, ProximityMetric::Haversine);
        // ~0.001° of latitude ≈ 111 m: inside a 250 m radius.
        assert!(zones.near_any(GeoPoint::new(11.017, 76.955)));
        // ~0.01° ≈ 1.1 km: outside.
        assert!(!zones.near_any(GeoPoint::new(11.026, 76.955)));
    }
}

// ── Weight views ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use sr_core::{GeoPoint, PlannerConfig};
    use crate::{PenaltyTier, RiskZoneSet, WeightView};

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    #[test]
    fn no_zones_means_base_lengths() {
        let (net, _) = super::helpers::square_network();
        let zones = RiskZoneSet::new(vec![], 0.4);
        let view = WeightView::assign(&net, &zones, PenaltyTier::Penalized, &config());
        assert_eq!(view.len(), net.edge_count());
        for i in 0..net.edge_count() {
            assert_eq!(view.cost(sr_core::EdgeId(i as u32)), net.edge_length_m[i]);
        }
    }

    #[test]
    fn risk_adjacent_edges_scaled() {
        let (net, [a, bb, ..]) = super::helpers::square_network();
        // Zone at the A-B midpoint; only the two A↔B directed edges penalized.
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.5)], 0.4);
        let view = WeightView::assign(&net, &zones, PenaltyTier::Penalized, &config());

        for i in 0..net.edge_count() {
            let e = sr_core::EdgeId(i as u32);
            let endpoints = (net.edge_from[i], net.edge_to[i]);
            let on_ab = endpoints == (a, bb) || endpoints == (bb, a);
            if on_ab {
                assert_eq!(view.cost(e), net.edge_length_m[i] * 5.0);
            } else {
                assert_eq!(view.cost(e), net.edge_length_m[i]);
            }
        }
    }

    #[test]
    fn positivity_all_tiers() {
        let (net, _) = super::helpers::square_network();
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.5)], 0.4);
        for tier in [PenaltyTier::Normal, PenaltyTier::Penalized, PenaltyTier::Escalated] {
            let view = WeightView::assign(&net, &zones, tier, &config());
            for i in 0..view.len() {
                assert!(view.cost(sr_core::EdgeId(i as u32)) > 0.0);
            }
        }
    }

    #[test]
    fn monotonic_penalty_across_tiers() {
        let (net, _) = super::helpers::square_network();
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.5)], 0.4);
        let cfg = config();
        let normal    = WeightView::assign(&net, &zones, PenaltyTier::Normal, &cfg);
        let penalized = WeightView::assign(&net, &zones, PenaltyTier::Penalized, &cfg);
        let escalated = WeightView::assign(&net, &zones, PenaltyTier::Escalated, &cfg);
        for i in 0..net.edge_count() {
            let e = sr_core::EdgeId(i as u32);
            assert!(escalated.cost(e) >= penalized.cost(e));
            assert!(penalized.cost(e) >= normal.cost(e));
            assert!(normal.cost(e) >= net.edge_length_m[i]);
        }
    }

    #[test]
    fn escalated_compounds_factors() {
        let cfg = config();
        assert_eq!(PenaltyTier::Normal.factor(&cfg), 1.0);
        assert_eq!(PenaltyTier::Penalized.factor(&cfg), 5.0);
        assert_eq!(PenaltyTier::Escalated.factor(&cfg), 50.0);
    }

    #[test]
    fn assignment_is_pure() {
        let (net, _) = super::helpers::square_network();
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.5)], 0.4);
        let cfg = config();
        let v1 = WeightView::assign(&net, &zones, PenaltyTier::Penalized, &cfg);
        let v2 = WeightView::assign(&net, &zones, PenaltyTier::Penalized, &cfg);
        for i in 0..net.edge_count() {
            let e = sr_core::EdgeId(i as u32);
            assert_eq!(v1.cost(e), v2.cost(e));
        }
    }
}

// ── Dijkstra path search ──────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use sr_core::{GeoPoint, PlannerConfig};
    use crate::{
        DijkstraPathFinder, PathFinder, PenaltyTier, RiskZoneSet, RoadNetworkBuilder,
        SpatialError, WeightView,
    };

    fn unpenalized(net: &crate::RoadNetwork) -> WeightView {
        let zones = RiskZoneSet::new(vec![], 0.002);
        WeightView::assign(net, &zones, PenaltyTier::Normal, &PlannerConfig::default())
    }

    #[test]
    fn trivial_same_node() {
        let (net, [a, ..]) = super::helpers::square_network();
        let view = unpenalized(&net);
        let p = DijkstraPathFinder.shortest_path(&net, &view, a, a).unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.total_cost, 0.0);
        assert_eq!(p.nodes, vec![a]);
    }

    #[test]
    fn shortest_path_avoids_penalized_edge() {
        let (net, [a, _, c, d]) = super::helpers::square_network();
        // Penalize A-B; the equal-length ring route via D becomes cheaper.
        let zones = RiskZoneSet::new(vec![GeoPoint::new(0.0, 0.5)], 0.4);
        let view =
            WeightView::assign(&net, &zones, PenaltyTier::Penalized, &PlannerConfig::default());
        let p = DijkstraPathFinder.shortest_path(&net, &view, a, c).unwrap();
        assert_eq!(p.nodes, vec![a, d, c]);
        assert_eq!(p.total_cost, 2.0);
    }

    #[test]
    fn path_cost_is_optimal() {
        let (net, [a, _, c, _]) = super::helpers::square_network();
        let view = unpenalized(&net);
        let p = DijkstraPathFinder.shortest_path(&net, &view, a, c).unwrap();
        // Both ring routes cost 2; no path can beat it.
        assert_eq!(p.total_cost, 2.0);
        assert_eq!(p.nodes.len(), 3);
    }

    #[test]
    fn coords_start_and_end_at_endpoints() {
        let (net, [a, _, c, _]) = super::helpers::square_network();
        let view = unpenalized(&net);
        let p = DijkstraPathFinder.shortest_path(&net, &view, a, c).unwrap();
        let coords = p.coords(&net);
        assert_eq!(coords.first().copied(), Some(net.node_pos[a.index()]));
        assert_eq!(coords.last().copied(), Some(net.node_pos[c.index()]));
    }

    #[test]
    fn no_route_disconnected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(1.0, 0.0));
        // No edges — a and c are completely disconnected.
        let net = b.build();
        let view = unpenalized(&net);
        let result = DijkstraPathFinder.shortest_path(&net, &view, a, c);
        assert!(matches!(result, Err(SpatialError::NoRoute { .. })));
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, 100.0); // one-way a→c
        let net = b.build();
        let view = unpenalized(&net);

        assert!(DijkstraPathFinder.shortest_path(&net, &view, a, c).is_ok());
        assert!(DijkstraPathFinder.shortest_path(&net, &view, c, a).is_err());
    }

    #[test]
    fn deterministic_under_equal_costs() {
        let (net, [a, _, c, _]) = super::helpers::square_network();
        let view = unpenalized(&net);
        // Both ring routes cost 2.0; repeated searches must pick the same one.
        let first = DijkstraPathFinder.shortest_path(&net, &view, a, c).unwrap();
        for _ in 0..10 {
            let again = DijkstraPathFinder.shortest_path(&net, &view, a, c).unwrap();
            assert_eq!(again.nodes, first.nodes);
        }
    }
}
