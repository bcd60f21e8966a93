//! `subway-path` — shortest paths across every line of a network.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`topology`] | `Topology` — "enumerate this line's segments and stations"     |
//! | [`graph`]    | `StationGraph` (CSR multigraph), `StationGraphBuilder`         |
//! | [`search`]   | `PathSearch` trait, `DijkstraSearch`                           |
//! | [`engine`]   | `ShortestPathEngine` — validation + graph build + search       |
//! | [`path`]     | `Path` — ordered stations and total distance                   |
//! | [`error`]    | `PathError`, `ValidationError`, `PathResult<T>`                |
//!
//! # Query model
//!
//! Every query builds a fresh [`StationGraph`] from the supplied lines and
//! drops it on return.  There is no shared mutable state, so concurrent
//! queries need no locking.  Every segment becomes an undirected edge;
//! segments joining the same two stations on different lines stay separate
//! parallel edges.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Batch queries run on the Rayon thread pool.                |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Path`.               |

pub mod engine;
pub mod error;
pub mod graph;
pub mod path;
pub mod search;
pub mod topology;


pub use engine::ShortestPathEngine;
pub use error::{PathError, PathResult, ValidationError};
pub use graph::{StationGraph, StationGraphBuilder};
pub use path::Path;
pub use search::{DijkstraSearch, PathSearch};
pub use topology::Topology;
