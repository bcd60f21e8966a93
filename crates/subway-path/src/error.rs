//! Path-query error types.

use subway_core::StationId;
use thiserror::Error;

/// Why a query was rejected before any search ran.  Checked in declaration
/// order; the first failing check is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no connected segments exist")]
    NoSegments,

    #[error("origin {0} is not on any line")]
    OriginNotOnLine(StationId),

    #[error("destination {0} is not on any line")]
    DestinationNotOnLine(StationId),
}

/// Errors produced by `subway-path`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid path query: {0}")]
    Validation(#[from] ValidationError),

    #[error("origin {from} and destination {to} are not connected")]
    NotFound { from: StationId, to: StationId },
}

impl PathError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PathError::Validation(_))
    }
}

pub type PathResult<T> = Result<T, PathError>;
