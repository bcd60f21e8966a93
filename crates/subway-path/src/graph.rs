//! Per-query station multigraph.
//!
//! # Data layout
//!
//! Stations are mapped to dense node indices `0..node_count` in the order
//! they are first seen.  Outgoing edges use **Compressed Sparse Row (CSR)**
//! layout: the edges leaving node `n` occupy
//!
//! ```text
//! edge_to[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! with the matching weights in `edge_weight`.  Each segment contributes one
//! edge in each direction.  Parallel edges are kept as-is, never merged or
//! min-reduced; the search relaxes every one of them.

use rustc_hash::FxHashMap;
use subway_core::StationId;
use subway_line::Segment;

use crate::Topology;

// ── StationGraph ──────────────────────────────────────────────────────────────

/// Undirected weighted multigraph over stations, stored as directed CSR
/// edges.  Build with [`StationGraphBuilder`] or
/// [`StationGraph::from_topology`].
#[derive(Debug, Clone)]
pub struct StationGraph {
    /// Station at each node index.
    stations: Vec<StationId>,
    index:    FxHashMap<StationId, u32>,

    /// CSR row pointer.  Length = `node_count + 1`.
    out_start:   Vec<u32>,
    edge_to:     Vec<u32>,
    edge_weight: Vec<u32>,
}

impl StationGraph {
    /// Flatten the segments of every line into one graph.
    pub fn from_topology<T: Topology>(lines: &[T]) -> Self {
        let edges: usize = lines.iter().map(|l| l.segments().len()).sum();
        let mut b = StationGraphBuilder::with_capacity(edges + 1, edges);
        for line in lines {
            for segment in line.segments() {
                b.add_segment(segment);
            }
        }
        b.build()
    }

    pub fn node_count(&self) -> usize {
        self.stations.len()
    }

    /// Directed edge count (twice the number of segments).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    /// Dense node index of `station`, if it appears in any segment.
    #[inline]
    pub fn node_of(&self, station: StationId) -> Option<usize> {
        self.index.get(&station).map(|&n| n as usize)
    }

    #[inline]
    pub fn station_at(&self, node: usize) -> StationId {
        self.stations[node]
    }

    /// `(neighbor, weight)` for every edge leaving `node`.
    #[inline]
    pub fn out_edges(&self, node: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let start = self.out_start[node] as usize;
        let end   = self.out_start[node + 1] as usize;
        (start..end).map(|e| (self.edge_to[e] as usize, self.edge_weight[e]))
    }

    #[inline]
    pub fn out_degree(&self, node: usize) -> usize {
        (self.out_start[node + 1] - self.out_start[node]) as usize
    }
}

// ── StationGraphBuilder ───────────────────────────────────────────────────────

/// Collect segments, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use subway_core::{Distance, StationId};
/// use subway_line::Segment;
/// use subway_path::StationGraphBuilder;
///
/// let mut b = StationGraphBuilder::new();
/// b.add_segment(&Segment::new(StationId(0), StationId(1), Distance::new(10).unwrap()));
/// b.add_segment(&Segment::new(StationId(1), StationId(0), Distance::new(4).unwrap()));
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 4); // two parallel segments, both directions
/// ```
#[derive(Debug, Default)]
pub struct StationGraphBuilder {
    stations:  Vec<StationId>,
    index:     FxHashMap<StationId, u32>,
    raw_edges: Vec<RawEdge>,
}

#[derive(Debug)]
struct RawEdge {
    from:   u32,
    to:     u32,
    weight: u32,
}

impl StationGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(stations: usize, segments: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(stations);
        Self {
            stations:  Vec::with_capacity(stations),
            index,
            raw_edges: Vec::with_capacity(segments * 2),
        }
    }

    /// Register `station` (idempotent) and return its node index.
    pub fn add_station(&mut self, station: StationId) -> u32 {
        if let Some(&n) = self.index.get(&station) {
            return n;
        }
        let n = self.stations.len() as u32;
        self.stations.push(station);
        self.index.insert(station, n);
        n
    }

    /// Add `segment` as an undirected edge.
    pub fn add_segment(&mut self, segment: &Segment) {
        let up   = self.add_station(segment.up);
        let down = self.add_station(segment.down);
        let weight = segment.distance.get();
        self.raw_edges.push(RawEdge { from: up, to: down, weight });
        self.raw_edges.push(RawEdge { from: down, to: up, weight });
    }

    pub fn node_count(&self) -> usize {
        self.stations.len()
    }

    /// Edges added so far, counting each direction of a segment.
    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`StationGraph`].
    pub fn build(self) -> StationGraph {
        let node_count = self.stations.len();

        let mut raw = self.raw_edges;
        // Stable sort keeps parallel edges in insertion order.
        raw.sort_by_key(|e| e.from);

        let edge_to:     Vec<u32> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<u32> = raw.iter().map(|e| e.weight).collect();

        let mut out_start = vec![0u32; node_count + 1];
        for e in &raw {
            out_start[e.from as usize + 1] += 1;
        }
        for i in 1..=node_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[node_count] as usize, edge_to.len());

        StationGraph {
            stations: self.stations,
            index: self.index,
            out_start,
            edge_to,
            edge_weight,
        }
    }
}
