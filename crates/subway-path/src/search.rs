//! Search trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! [`ShortestPathEngine`](crate::ShortestPathEngine) runs searches through
//! the [`PathSearch`] trait, so callers can swap in A*, bidirectional
//! Dijkstra, or a scripted fixture without touching validation or graph
//! construction.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use subway_core::StationId;
use tracing::trace;

use crate::{Path, StationGraph};

/// Sentinel for "no predecessor".
const NO_NODE: u32 = u32::MAX;

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Single-pair shortest-path search over a [`StationGraph`].
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one engine can serve batch
/// queries from Rayon worker threads.
pub trait PathSearch: Send + Sync {
    /// Minimum-distance path from `from` to `to`.
    ///
    /// Returns `None` if either station is absent from `graph` or no path
    /// connects them.  `from == to` yields [`Path::trivial`].
    fn search(&self, graph: &StationGraph, from: StationId, to: StationId) -> Option<Path>;
}

// ── DijkstraSearch ────────────────────────────────────────────────────────────

/// Binary-heap Dijkstra.  Segment distances are strictly positive, so no
/// negative-weight handling is needed.
///
/// Among equal-cost paths the one returned is unspecified but always
/// minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSearch;

impl PathSearch for DijkstraSearch {
    fn search(&self, graph: &StationGraph, from: StationId, to: StationId) -> Option<Path> {
        let source = graph.node_of(from)?;
        let target = graph.node_of(to)?;
        if source == target {
            return Some(Path::trivial(from));
        }
        dijkstra(graph, source, target)
    }
}

fn dijkstra(graph: &StationGraph, source: usize, target: usize) -> Option<Path> {
    let n = graph.node_count();
    // dist[v] = best known distance to v.
    let mut dist = vec![u64::MAX; n];
    let mut prev = vec![NO_NODE; n];
    dist[source] = 0;

    // Reverse turns the max-heap into a min-heap.
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == target {
            trace!(nodes = n, distance = cost, "target settled");
            return Some(reconstruct(graph, &prev, target, cost));
        }

        // Stale heap entry.
        if cost > dist[node] {
            continue;
        }

        for (neighbor, weight) in graph.out_edges(node) {
            let next = cost + weight as u64;
            if next < dist[neighbor] {
                dist[neighbor] = next;
                prev[neighbor] = node as u32;
                heap.push(Reverse((next, neighbor)));
            }
        }
    }

    None
}

fn reconstruct(graph: &StationGraph, prev: &[u32], target: usize, distance: u64) -> Path {
    let mut stations = vec![graph.station_at(target)];
    let mut cur = target;
    while prev[cur] != NO_NODE {
        cur = prev[cur] as usize;
        stations.push(graph.station_at(cur));
    }
    stations.reverse();
    Path { stations, distance }
}
