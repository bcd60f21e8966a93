//! CSV network loader.
//!
//! # CSV format
//!
//! One row per segment.  Rows are applied in file order.
//!
//! ```csv
//! line,color,up_station,down_station,distance
//! Line 2,green,Gyodae,Gangnam,10
//! Shinbundang,red,Gangnam,Yangjae,10
//! Line 3,orange,Gyodae,Nambu Terminal,2
//! Line 3,orange,Nambu Terminal,Yangjae,3
//! ```
//!
//! - Stations are created by name the first time they appear.
//! - A line is created by its first row; every later row with the same
//!   `line` name is added to it as a segment, so each row must satisfy the
//!   usual topology rules against the rows before it.
//! - `color` is only read from a line's first row.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use subway_core::{LineId, StationId};
use tracing::debug;

use crate::{Network, NetworkError, NetworkResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRecord {
    line:         String,
    color:        String,
    up_station:   String,
    down_station: String,
    distance:     u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Network`] from a CSV file.
pub fn load_network_csv(path: &Path) -> NetworkResult<Network> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_network_reader(file)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice) and for
/// networks embedded in a binary.
pub fn load_network_reader<R: Read>(reader: R) -> NetworkResult<Network> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut network = Network::new();
    let mut lines_by_name: HashMap<String, LineId> = HashMap::new();

    for (row_idx, result) in csv_reader.deserialize::<SegmentRecord>().enumerate() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;

        let up   = station_id(&mut network, &row.up_station)?;
        let down = station_id(&mut network, &row.down_station)?;

        match lines_by_name.get(&row.line) {
            Some(&line) => network.add_segment(line, up, down, row.distance)?,
            None => {
                let line = network.create_line(&row.line, &row.color, up, down, row.distance)?;
                lines_by_name.insert(row.line, line);
            }
        }
        debug!(row = row_idx + 1, "segment row applied");
    }

    Ok(network)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn station_id(network: &mut Network, name: &str) -> NetworkResult<StationId> {
    if name.is_empty() {
        return Err(NetworkError::Parse("empty station name".to_string()));
    }
    match network.station_by_name(name) {
        Some(s) => Ok(s.id()),
        None => network.add_station(name),
    }
}
