//! A single weighted hop between two stations.

use subway_core::{Distance, StationId};

/// Ordered pair `(up, down)` with a positive distance.
///
/// Direction only records how the segment was entered on its line; the path
/// engine treats every segment as traversable both ways.
///
/// `up == down` is representable here and rejected when the segment is added
/// to a chain.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub up:       StationId,
    pub down:     StationId,
    pub distance: Distance,
}

impl Segment {
    pub fn new(up: StationId, down: StationId, distance: Distance) -> Self {
        Self { up, down, distance }
    }

    /// `true` if both endpoints are the same station.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.up == self.down
    }

    #[inline]
    pub fn touches(&self, station: StationId) -> bool {
        self.up == station || self.down == station
    }

    /// Both endpoints, `up` first.
    #[inline]
    pub fn endpoints(&self) -> [StationId; 2] {
        [self.up, self.down]
    }
}
