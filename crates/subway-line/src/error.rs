use subway_core::StationId;
use thiserror::Error;

/// Topology violations raised by [`SegmentChain`](crate::SegmentChain).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("segment endpoints are identical ({station})")]
    InvalidSegment { station: StationId },

    #[error("segment {up}-{down} already spans two stations on the line")]
    DuplicateSegment { up: StationId, down: StationId },

    #[error("segment {up}-{down} does not touch the existing line")]
    DisconnectedSegment { up: StationId, down: StationId },

    #[error("station {station} cannot be removed from the line")]
    SegmentRemoval { station: StationId },
}

pub type LineResult<T> = Result<T, LineError>;
