//! The one capability the engine needs from a line.

use subway_core::StationId;
use subway_line::{Line, Segment, SegmentChain};

/// Anything that can list its segments and answer station membership.
///
/// Implemented for [`Line`], [`SegmentChain`], and `Vec<Segment>` so
/// test fixtures can stand in for real lines.
pub trait Topology {
    fn segments(&self) -> &[Segment];

    fn contains_station(&self, station: StationId) -> bool {
        self.segments().iter().any(|s| s.touches(station))
    }
}

impl Topology for SegmentChain {
    fn segments(&self) -> &[Segment] {
        SegmentChain::segments(self)
    }

    fn contains_station(&self, station: StationId) -> bool {
        SegmentChain::contains_station(self, station)
    }
}

impl Topology for Line {
    fn segments(&self) -> &[Segment] {
        Line::segments(self)
    }

    fn contains_station(&self, station: StationId) -> bool {
        Line::contains_station(self, station)
    }
}

impl Topology for Vec<Segment> {
    fn segments(&self) -> &[Segment] {
        self
    }
}

impl<T: Topology> Topology for &T {
    fn segments(&self) -> &[Segment] {
        (**self).segments()
    }

    fn contains_station(&self, station: StationId) -> bool {
        (**self).contains_station(station)
    }
}
