//! Line entity.

use subway_core::{LineId, StationId};

use crate::{LineResult, Segment, SegmentChain};

/// A named, colored transit line.  Exclusively owns its [`SegmentChain`];
/// segments are never shared between lines.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    id:    LineId,
    name:  String,
    color: String,
    chain: SegmentChain,
}

impl Line {
    /// Create a line with an empty chain.
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { id, name: name.into(), color: color.into(), chain: SegmentChain::new() }
    }

    /// Replace name and color.  Topology is untouched.
    pub fn update(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.name = name.into();
        self.color = color.into();
    }

    #[inline]
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }

    pub fn add_segment(&mut self, segment: Segment) -> LineResult<()> {
        self.chain.add_segment(segment)
    }

    pub fn remove_station(&mut self, station: StationId) -> LineResult<Segment> {
        self.chain.remove_station(station)
    }

    pub fn segments(&self) -> &[Segment] {
        self.chain.segments()
    }

    pub fn stations(&self) -> Vec<StationId> {
        self.chain.stations()
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.chain.contains_station(station)
    }
}
