//! Query entry point: validate, build the graph, search.

use subway_core::StationId;
use tracing::debug;

use crate::{
    DijkstraSearch, Path, PathError, PathResult, PathSearch, StationGraph, Topology,
    ValidationError,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Stateless shortest-path engine.  Holds only the search strategy; every
/// query builds and discards its own [`StationGraph`].
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine<S = DijkstraSearch> {
    search: S,
}

impl ShortestPathEngine<DijkstraSearch> {
    pub fn new() -> Self {
        Self { search: DijkstraSearch }
    }
}

impl<S: PathSearch> ShortestPathEngine<S> {
    /// Use a custom search strategy.
    pub fn with_search(search: S) -> Self {
        Self { search }
    }

    /// Minimum-distance path from `origin` to `destination` across every
    /// segment of every line in `lines`.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// 1. [`ValidationError::NoSegments`] if `lines` hold no segments at all.
    /// 2. [`ValidationError::OriginNotOnLine`] if no line contains `origin`.
    /// 3. [`ValidationError::DestinationNotOnLine`] likewise for `destination`.
    /// 4. [`PathError::NotFound`] if the two stations are in disconnected
    ///    parts of the network.
    ///
    /// `origin == destination` on a line returns a one-station path of
    /// distance 0.
    pub fn calculate_shortest_path<T: Topology>(
        &self,
        lines: &[T],
        origin: StationId,
        destination: StationId,
    ) -> PathResult<Path> {
        validate(lines, origin, destination)?;

        let graph = StationGraph::from_topology(lines);
        debug!(
            lines = lines.len(),
            stations = graph.node_count(),
            edges = graph.edge_count(),
            %origin,
            %destination,
            "shortest path query"
        );

        self.search
            .search(&graph, origin, destination)
            .ok_or(PathError::NotFound { from: origin, to: destination })
    }

    /// Answer many queries against one topology.
    ///
    /// The graph is built once and shared; each query is validated and
    /// searched independently, so one failing query does not affect the
    /// others.  Results are in the same order as `queries`.
    pub fn calculate_shortest_paths<T: Topology>(
        &self,
        lines: &[T],
        queries: &[(StationId, StationId)],
    ) -> Vec<PathResult<Path>> {
        if !has_segments(lines) {
            return queries
                .iter()
                .map(|_| Err(ValidationError::NoSegments.into()))
                .collect();
        }

        let graph = StationGraph::from_topology(lines);
        debug!(queries = queries.len(), stations = graph.node_count(), "batch path query");

        let answer = |&(origin, destination): &(StationId, StationId)| -> PathResult<Path> {
            // The graph holds exactly the stations of the supplied lines.
            if !graph.contains(origin) {
                return Err(ValidationError::OriginNotOnLine(origin).into());
            }
            if !graph.contains(destination) {
                return Err(ValidationError::DestinationNotOnLine(destination).into());
            }
            self.search
                .search(&graph, origin, destination)
                .ok_or(PathError::NotFound { from: origin, to: destination })
        };

        #[cfg(feature = "parallel")]
        {
            queries.par_iter().map(answer).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries.iter().map(answer).collect()
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

fn has_segments<T: Topology>(lines: &[T]) -> bool {
    lines.iter().any(|l| !l.segments().is_empty())
}

fn validate<T: Topology>(
    lines: &[T],
    origin: StationId,
    destination: StationId,
) -> Result<(), ValidationError> {
    if !has_segments(lines) {
        return Err(ValidationError::NoSegments);
    }
    if !lines.iter().any(|l| l.contains_station(origin)) {
        return Err(ValidationError::OriginNotOnLine(origin));
    }
    if !lines.iter().any(|l| l.contains_station(destination)) {
        return Err(ValidationError::DestinationNotOnLine(destination));
    }
    Ok(())
}
