//! In-memory directory of stations and lines.

use std::collections::BTreeMap;

use subway_core::{Distance, LineId, Station, StationId};
use subway_line::{Line, Segment};
use subway_path::ShortestPathEngine;
use tracing::debug;

use crate::{NetworkError, NetworkResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A resolved shortest path: named stations plus total distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub stations: Vec<Station>,
    pub distance: u64,
}

impl Route {
    pub fn station_names(&self) -> Vec<&str> {
        self.stations.iter().map(Station::name).collect()
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Owns every `Station` and `Line`.  IDs are sequential from 0 and never
/// reused after deletion.
#[derive(Debug)]
pub struct Network {
    stations:     BTreeMap<StationId, Station>,
    lines:        BTreeMap<LineId, Line>,
    next_station: StationId,
    next_line:    LineId,
    engine:       ShortestPathEngine,
}

impl Network {
    pub fn new() -> Self {
        Self {
            stations:     BTreeMap::new(),
            lines:        BTreeMap::new(),
            next_station: StationId(0),
            next_line:    LineId(0),
            engine:       ShortestPathEngine::new(),
        }
    }

    // ── Stations ──────────────────────────────────────────────────────────

    /// Register a station.  Names are unique within the network.
    pub fn add_station(&mut self, name: impl Into<String>) -> NetworkResult<StationId> {
        let name = name.into();
        if self.station_by_name(&name).is_some() {
            return Err(NetworkError::DuplicateStationName(name));
        }
        let id = self.next_station;
        self.next_station = id.successor();
        debug!(%id, %name, "station added");
        self.stations.insert(id, Station::new(id, name));
        Ok(id)
    }

    pub fn station(&self, id: StationId) -> NetworkResult<&Station> {
        self.stations.get(&id).ok_or(NetworkError::StationNotFound(id))
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|s| s.name() == name)
    }

    /// All stations in ID order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Delete a station no line touches any more.
    pub fn remove_station(&mut self, id: StationId) -> NetworkResult<Station> {
        self.station(id)?;
        if let Some(line) = self.lines.values().find(|l| l.contains_station(id)) {
            return Err(NetworkError::StationInUse { station: id, line: line.id() });
        }
        self.stations.remove(&id).ok_or(NetworkError::StationNotFound(id))
    }

    // ── Lines ─────────────────────────────────────────────────────────────

    /// Create a line together with its first segment.
    ///
    /// Nothing is stored if the segment is rejected.
    pub fn create_line(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> NetworkResult<LineId> {
        let segment = self.segment(up, down, distance)?;

        let id = self.next_line;
        let mut line = Line::new(id, name, color);
        line.add_segment(segment)?;

        self.next_line = id.successor();
        debug!(%id, name = line.name(), "line created");
        self.lines.insert(id, line);
        Ok(id)
    }

    pub fn line(&self, id: LineId) -> NetworkResult<&Line> {
        self.lines.get(&id).ok_or(NetworkError::LineNotFound(id))
    }

    /// All lines in ID order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn update_line(
        &mut self,
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> NetworkResult<()> {
        self.line_mut(id)?.update(name, color);
        Ok(())
    }

    pub fn delete_line(&mut self, id: LineId) -> NetworkResult<Line> {
        let line = self.lines.remove(&id).ok_or(NetworkError::LineNotFound(id))?;
        debug!(%id, name = line.name(), "line deleted");
        Ok(line)
    }

    // ── Segments ──────────────────────────────────────────────────────────

    pub fn add_segment(
        &mut self,
        line: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> NetworkResult<()> {
        let segment = self.segment(up, down, distance)?;
        self.line_mut(line)?.add_segment(segment)?;
        Ok(())
    }

    /// Remove the tail segment of `line`, gated on `station` being on it.
    pub fn remove_segment(&mut self, line: LineId, station: StationId) -> NetworkResult<Segment> {
        self.station(station)?;
        Ok(self.line_mut(line)?.remove_station(station)?)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Shortest route between two registered stations over every line.
    pub fn shortest_path(&self, origin: StationId, destination: StationId) -> NetworkResult<Route> {
        self.station(origin)?;
        self.station(destination)?;

        let lines: Vec<&Line> = self.lines.values().collect();
        let path = self.engine.calculate_shortest_path(&lines, origin, destination)?;

        let stations = path
            .stations
            .iter()
            .map(|&id| self.station(id).cloned())
            .collect::<NetworkResult<Vec<_>>>()?;
        Ok(Route { stations, distance: path.distance })
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn line_mut(&mut self, id: LineId) -> NetworkResult<&mut Line> {
        self.lines.get_mut(&id).ok_or(NetworkError::LineNotFound(id))
    }

    /// Resolve both endpoints and wrap the distance.
    fn segment(&self, up: StationId, down: StationId, distance: u32) -> NetworkResult<Segment> {
        self.station(up)?;
        self.station(down)?;
        Ok(Segment::new(up, down, Distance::new(distance)?))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
