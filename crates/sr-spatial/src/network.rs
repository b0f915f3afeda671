//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`) are sorted by
//! source node and indexed by `EdgeId`.  Iteration over a node's outgoing
//! edges is therefore a contiguous memory scan — ideal for Dijkstra's inner
//! loop.  Parallel edges between the same node pair are permitted (divided
//! roads); each gets its own `EdgeId`.
//!
//! # Mutability
//!
//! A `RoadNetwork` is loaded once by an external map-data collaborator and
//! is read-only for the rest of the process.  Per-request cost changes live
//! in [`crate::WeightView`], never in the network itself, so concurrent
//! planning requests can share `&RoadNetwork` freely.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to snap origin/destination query points to road nodes.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sr_core::{EdgeId, GeoPoint, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries within a city (error < 0.1 % at ≤ 60° lat).
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node snapping.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient path reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Base length of each edge in metres.  Strictly positive; this is the
    /// unpenalized Dijkstra cost.
    pub edge_length_m: Vec<f32>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    ///
    /// Any snap request against an empty network returns `None`, which the
    /// planner surfaces as an unresolvable location.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Approximate midpoint of `edge`: the arithmetic mean of its endpoint
    /// coordinates.  This is what risk proximity is tested against.
    #[inline]
    pub fn edge_midpoint(&self, edge: EdgeId) -> GeoPoint {
        let from = self.node_pos[self.edge_from[edge.index()].index()];
        let to   = self.node_pos[self.edge_to[edge.index()].index()];
        from.midpoint(to)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Ties at equal distance are broken by the lowest `NodeId` so repeated
    /// queries are deterministic.  Returns `None` only if the network has
    /// no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        let query = [pos.lat, pos.lon];
        let mut iter = self.spatial_idx.nearest_neighbor_iter(&query);
        let first = iter.next()?;
        let best_d2 = first.distance_2(&query);
        let mut best = first.id;
        // nearest_neighbor_iter yields ascending distance; scan the
        // equal-distance prefix for the smallest id.
        for entry in iter {
            if entry.distance_2(&query) > best_d2 {
                break;
            }
            best = best.min(entry.id);
        }
        Some(best)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order.  `build()`
/// sorts edges by source node, constructs the CSR arrays, and bulk-loads the
/// R-tree.
///
/// # Example
///
/// ```
/// use sr_core::GeoPoint;
/// use sr_spatial::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(11.016, 76.955));
/// let c = b.add_node(GeoPoint::new(11.020, 76.960));
/// b.add_road(a, c, 1_200.0); // 1.2 km, both directions
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    length_m: f32,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from an external map source.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    ///
    /// `length_m` must be finite and strictly positive — the shortest-path
    /// search requires positive costs.  Enforcing this is the loader's
    /// contract; it is checked here in debug builds only.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: f32) {
        debug_assert!(
            length_m.is_finite() && length_m > 0.0,
            "edge {from}->{to} has non-positive length {length_m}"
        );
        self.raw_edges.push(RawEdge { from, to, length_m });
    }

    /// Convenience: add edges in **both directions** for an undirected road
    /// segment (the common case for most road types).
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f32) {
        self.add_directed_edge(a, b, length_m);
        self.add_directed_edge(b, a, length_m);
    }

    /// Look up the position of a node added earlier (used by loaders to
    /// compute edge lengths between adjacent way nodes).
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log E) for edge sort + O(N log N) for R-tree bulk
    /// load, where N = nodes, E = edges.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| e.from.0);

        // Build edge arrays from sorted raw edges.
        let edge_from:     Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:       Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f32>    = raw.iter().map(|e| e.length_m).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadNetwork {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
