//! `subway-line` — line topology maintenance.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`segment`] | `Segment` — one weighted hop between adjacent stations     |
//! | [`chain`]   | `SegmentChain` — ordered segments of one line + invariants |
//! | [`line`]    | `Line` — identity (id, name, color) owning one chain       |
//! | [`error`]   | `LineError`, `LineResult<T>`                               |
//!
//! # Topology rules
//!
//! A chain starts empty.  The first segment is always accepted.  Every later
//! segment must share **exactly one** station with the stations already on
//! the chain: sharing both would close a loop, sharing neither would leave a
//! disconnected piece.  Removal always drops the most recently appended
//! segment; see [`SegmentChain::remove_station`].

pub mod chain;
pub mod error;
pub mod line;
pub mod segment;


pub use chain::SegmentChain;
pub use error::{LineError, LineResult};
pub use line::Line;
pub use segment::Segment;
