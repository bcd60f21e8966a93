use subway_core::{CoreError, LineId, StationId};
use subway_line::LineError;
use subway_path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("line {0} not found")]
    LineNotFound(LineId),

    #[error("station name {0:?} is already taken")]
    DuplicateStationName(String),

    #[error("station {station} is still served by line {line}")]
    StationInUse { station: StationId, line: LineId },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Line(#[from] LineError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
