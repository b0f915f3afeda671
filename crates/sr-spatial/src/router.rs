//! Shortest-path trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `sr-plan` invokes path search via the [`PathFinder`] trait, so
//! applications can swap in custom implementations (contraction
//! hierarchies, A*) without touching the planner.  The default
//! [`DijkstraPathFinder`] is sufficient for city-scale graphs.
//!
//! # Cost units
//!
//! Costs come from a [`WeightView`] and are in metres scaled by the penalty
//! tier.  All weights are strictly positive, so plain Dijkstra is correct
//! with no negative-cycle handling.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use sr_core::{EdgeId, GeoPoint, NodeId};

use crate::network::RoadNetwork;
use crate::weights::WeightView;
use crate::SpatialError;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a path search: the ordered node sequence from origin to
/// destination inclusive, and the total cost under the weight view used.
#[derive(Debug, Clone)]
pub struct Path {
    /// Nodes visited in order.  Always non-empty; a trivial path
    /// (origin == destination) contains the single shared node.
    pub nodes: Vec<NodeId>,
    /// Sum of edge costs along the path.
    pub total_cost: f32,
}

impl Path {
    /// `true` if the origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Project the node sequence onto coordinates.  The first element is
    /// the resolved origin node's position and the last the destination's.
    pub fn coords(&self, network: &RoadNetwork) -> Vec<GeoPoint> {
        self.nodes.iter().map(|n| network.node_pos[n.index()]).collect()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one instance can serve
/// concurrent planning requests.
pub trait PathFinder: Send + Sync {
    /// Compute the least-cost path from `from` to `to` under `weights`.
    ///
    /// `from == to` yields the trivial single-node path.  Disconnected
    /// endpoints yield [`SpatialError::NoRoute`] — an expected outcome for
    /// the caller to translate, not a fault.
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        weights: &WeightView,
        from: NodeId,
        to: NodeId,
    ) -> Result<Path, SpatialError>;
}

// ── DijkstraPathFinder ────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph.
///
/// Deterministic: heap ties are broken by `NodeId`, so identical inputs
/// always produce the identical path.
pub struct DijkstraPathFinder;

impl PathFinder for DijkstraPathFinder {
    fn shortest_path(
        &self,
        network: &RoadNetwork,
        weights: &WeightView,
        from: NodeId,
        to: NodeId,
    ) -> Result<Path, SpatialError> {
        dijkstra(network, weights, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered by cost, then `NodeId` for deterministic ties.
///
/// Costs are finite and non-negative by construction, so `total_cmp` gives
/// a well-behaved total order.
#[derive(Copy, Clone, PartialEq)]
struct QueueEntry {
    cost: f32,
    node: NodeId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(
    network: &RoadNetwork,
    weights: &WeightView,
    from: NodeId,
    to: NodeId,
) -> Result<Path, SpatialError> {
    if from == to {
        return Ok(Path { nodes: vec![from], total_cost: 0.0 });
    }

    let n = network.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f32::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    heap.push(Reverse(QueueEntry { cost: 0.0, node: from }));

    while let Some(Reverse(QueueEntry { cost, node })) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost + weights.cost(edge);

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse(QueueEntry { cost: new_cost, node: neighbor }));
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(
    network: &RoadNetwork,
    prev_edge: Vec<EdgeId>,
    from: NodeId,
    to: NodeId,
    total_cost: f32,
) -> Path {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    debug_assert_eq!(*nodes.last().unwrap(), from);
    nodes.reverse();
    Path { nodes, total_cost }
}
