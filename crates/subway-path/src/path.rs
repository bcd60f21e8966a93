use subway_core::StationId;

/// Result of a successful query: stations from origin to destination
/// (both inclusive) and the summed segment distance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub stations: Vec<StationId>,
    pub distance: u64,
}

impl Path {
    /// Zero-length path of a station to itself.
    pub fn trivial(station: StationId) -> Self {
        Self { stations: vec![station], distance: 0 }
    }

    /// `true` if origin and destination are the same station.
    pub fn is_trivial(&self) -> bool {
        self.stations.len() <= 1
    }

    /// Number of segments traversed.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn origin(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    pub fn destination(&self) -> Option<StationId> {
        self.stations.last().copied()
    }
}
